/// Game loop timing and control system
///
/// Implements a fixed timestep game loop with variable rendering.
/// This ensures the simulation ticks at a consistent rate while
/// rendering as fast as possible. Pausing is a session-level state,
/// not a loop-level one: a paused session still ticks, it just
/// ignores gameplay updates.
use std::time::{Duration, Instant};

/// Target simulation rate (60 logical ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of simulation steps per frame to prevent spiral of death
const MAX_SIM_STEPS: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time when game loop started
    start_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    tick_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of fixed ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        // Accumulate frame time
        self.accumulator += frame_time;

        // Calculate number of fixed ticks to run
        let mut ticks = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && ticks < MAX_SIM_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            ticks += 1;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Get the fixed timestep for simulation ticks (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get the interpolation alpha for smooth rendering between ticks
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / FIXED_TIMESTEP
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of frames rendered
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of simulation ticks executed
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
