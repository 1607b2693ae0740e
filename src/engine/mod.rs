// Engine modules: fixed-step loop, input, asset catalog, audio

pub mod assets;
pub mod audio;
pub mod game_loop;
pub mod input;
