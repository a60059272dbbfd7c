//! Game configuration resource.
//!
//! Settings are loaded from an INI file. Every key is optional; missing keys
//! keep the defaults below, which reproduce the classic 800x600, 60 FPS game.
//! All speeds are per-frame increments.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! vsync = false
//!
//! [track]
//! divergence_angle = 30
//! branch_length = 300
//! scroll_speed = 2
//! cooldown_frames = 180
//!
//! [trolley]
//! width = 40
//! height = 30
//! rotation_speed = 2
//! vertical_offset = 3
//! transition_step = 0.02
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = false;
const DEFAULT_DIVERGENCE_ANGLE: f32 = 30.0;
const DEFAULT_BRANCH_LENGTH: f32 = 300.0;
const DEFAULT_SCROLL_SPEED: f32 = 2.0;
const DEFAULT_COOLDOWN_FRAMES: u32 = 180;
const DEFAULT_TROLLEY_WIDTH: f32 = 40.0;
const DEFAULT_TROLLEY_HEIGHT: f32 = 30.0;
const DEFAULT_ROTATION_SPEED: f32 = 2.0;
const DEFAULT_VERTICAL_OFFSET: f32 = 3.0;
const DEFAULT_TRANSITION_STEP: f32 = 0.02;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";
/// Largest accepted window side in pixels.
pub const MAX_WINDOW_DIMENSION: u32 = 16384;

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second. Every per-frame speed below assumes this rate.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Degrees each branch leaves the main line at.
    pub divergence_angle: f32,
    /// Length of each fork branch in pixels.
    pub branch_length: f32,
    /// Pixels the fork moves left per frame.
    pub scroll_speed: f32,
    /// Idle frames between a fork leaving and the next one appearing.
    pub cooldown_frames: u32,
    pub trolley_width: f32,
    pub trolley_height: f32,
    /// Degrees per frame the trolley turns toward the chosen branch.
    pub rotation_speed: f32,
    /// Vertical pixels per frame at a 90 degree bank.
    pub vertical_offset: f32,
    /// Transition progress added per frame once decided.
    pub transition_step: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            divergence_angle: DEFAULT_DIVERGENCE_ANGLE,
            branch_length: DEFAULT_BRANCH_LENGTH,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            cooldown_frames: DEFAULT_COOLDOWN_FRAMES,
            trolley_width: DEFAULT_TROLLEY_WIDTH,
            trolley_height: DEFAULT_TROLLEY_HEIGHT,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
            transition_step: DEFAULT_TRANSITION_STEP,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config from {:?}: {}x{} window, fps={}, cooldown={} frames",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.cooldown_frames
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let get_uint = |section: &str, key: &str| {
            let value = config.getuint(section, key).ok().flatten()?;
            match u32::try_from(value) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!("[{}] {} = {} is out of range, ignored", section, key, value);
                    None
                }
            }
        };
        let get_float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [window] section
        if let Some(width) = get_uint("window", "width") {
            self.window_width = width;
        }
        if let Some(height) = get_uint("window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = get_uint("window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [track] section
        if let Some(angle) = get_float("track", "divergence_angle") {
            self.divergence_angle = angle;
        }
        if let Some(length) = get_float("track", "branch_length") {
            self.branch_length = length;
        }
        if let Some(speed) = get_float("track", "scroll_speed") {
            self.scroll_speed = speed;
        }
        if let Some(frames) = get_uint("track", "cooldown_frames") {
            self.cooldown_frames = frames;
        }

        // [trolley] section
        if let Some(width) = get_float("trolley", "width") {
            self.trolley_width = width;
        }
        if let Some(height) = get_float("trolley", "height") {
            self.trolley_height = height;
        }
        if let Some(speed) = get_float("trolley", "rotation_speed") {
            self.rotation_speed = speed;
        }
        if let Some(offset) = get_float("trolley", "vertical_offset") {
            self.vertical_offset = offset;
        }
        if let Some(step) = get_float("trolley", "transition_step") {
            self.transition_step = step;
        }

        self.sanitize();
    }

    /// Replace values the simulation cannot work with by their defaults.
    fn sanitize(&mut self) {
        let valid_side = |side: u32| (1..=MAX_WINDOW_DIMENSION).contains(&side);
        if !(valid_side(self.window_width) && valid_side(self.window_height)) {
            warn!(
                "Invalid window size {}x{}, using {}x{}",
                self.window_width, self.window_height, DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT
            );
            self.window_width = DEFAULT_WINDOW_WIDTH;
            self.window_height = DEFAULT_WINDOW_HEIGHT;
        }
        if self.target_fps == 0 {
            warn!("target_fps must be positive, using {}", DEFAULT_TARGET_FPS);
            self.target_fps = DEFAULT_TARGET_FPS;
        }
        if self.cooldown_frames == 0 {
            warn!("cooldown_frames must be at least 1, using 1");
            self.cooldown_frames = 1;
        }
        if !self.divergence_angle.is_finite() {
            warn!(
                "divergence_angle must be finite, using {}",
                DEFAULT_DIVERGENCE_ANGLE
            );
            self.divergence_angle = DEFAULT_DIVERGENCE_ANGLE;
        }
        if !self.vertical_offset.is_finite() {
            warn!(
                "vertical_offset must be finite, using {}",
                DEFAULT_VERTICAL_OFFSET
            );
            self.vertical_offset = DEFAULT_VERTICAL_OFFSET;
        }
        if !is_positive(self.branch_length) {
            warn!(
                "branch_length must be positive, using {}",
                DEFAULT_BRANCH_LENGTH
            );
            self.branch_length = DEFAULT_BRANCH_LENGTH;
        }
        if !is_positive(self.scroll_speed) {
            warn!("scroll_speed must be positive, using {}", DEFAULT_SCROLL_SPEED);
            self.scroll_speed = DEFAULT_SCROLL_SPEED;
        }
        if !is_positive(self.rotation_speed) {
            warn!(
                "rotation_speed must be positive, using {}",
                DEFAULT_ROTATION_SPEED
            );
            self.rotation_speed = DEFAULT_ROTATION_SPEED;
        }
        if !(is_positive(self.transition_step) && self.transition_step <= 1.0) {
            warn!(
                "transition_step must be in (0, 1], using {}",
                DEFAULT_TRANSITION_STEP
            );
            self.transition_step = DEFAULT_TRANSITION_STEP;
        }
        if !(is_positive(self.trolley_width) && is_positive(self.trolley_height)) {
            warn!(
                "Invalid trolley size, using {}x{}",
                DEFAULT_TROLLEY_WIDTH, DEFAULT_TROLLEY_HEIGHT
            );
            self.trolley_width = DEFAULT_TROLLEY_WIDTH;
            self.trolley_height = DEFAULT_TROLLEY_HEIGHT;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [track] section
        config.set(
            "track",
            "divergence_angle",
            Some(self.divergence_angle.to_string()),
        );
        config.set("track", "branch_length", Some(self.branch_length.to_string()));
        config.set("track", "scroll_speed", Some(self.scroll_speed.to_string()));
        config.set(
            "track",
            "cooldown_frames",
            Some(self.cooldown_frames.to_string()),
        );

        // [trolley] section
        config.set("trolley", "width", Some(self.trolley_width.to_string()));
        config.set("trolley", "height", Some(self.trolley_height.to_string()));
        config.set(
            "trolley",
            "rotation_speed",
            Some(self.rotation_speed.to_string()),
        );
        config.set(
            "trolley",
            "vertical_offset",
            Some(self.vertical_offset.to_string()),
        );
        config.set(
            "trolley",
            "transition_step",
            Some(self.transition_step.to_string()),
        );

        config
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

// false for NaN and infinity as well
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_layout() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.cooldown_frames, 180);
        assert_eq!(config.divergence_angle, 30.0);
        assert_eq!(config.branch_length, 300.0);
        assert_eq!(config.transition_step, 0.02);
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 1024\n\n[track]\ncooldown_frames = 90\ndivergence_angle = 45\n",
            )
            .unwrap();
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.cooldown_frames, 90);
        assert_eq!(config.divergence_angle, 45.0);
        assert_eq!(config.scroll_speed, 2.0);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[track]\ncooldown_frames = 0\nbranch_length = -5\n\n[trolley]\ntransition_step = 3\n",
            )
            .unwrap();
        assert_eq!(config.cooldown_frames, 1);
        assert_eq!(config.branch_length, 300.0);
        assert_eq!(config.transition_step, 0.02);
    }

    #[test]
    fn test_out_of_range_integers_are_not_truncated() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 4294967297\ntarget_fps = 4294967356\n\n[track]\ncooldown_frames = 4294967296\n",
            )
            .unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.cooldown_frames, 180);
    }

    #[test]
    fn test_oversized_window_falls_back() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 1024\nheight = 3000000000\n")
            .unwrap();
        assert_eq!(config.window_size(), (800, 600));

        let screen = crate::resources::screensize::ScreenSize::from_config(&config);
        assert_eq!(screen.track_y(), 300.0);
    }

    #[test]
    fn test_non_finite_floats_fall_back() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[track]\ndivergence_angle = nan\nscroll_speed = inf\n\n[trolley]\nvertical_offset = -inf\n",
            )
            .unwrap();
        assert_eq!(config.divergence_angle, 30.0);
        assert_eq!(config.scroll_speed, 2.0);
        assert_eq!(config.vertical_offset, 3.0);
    }

    #[test]
    fn test_unparseable_values_are_ignored() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[track]\nscroll_speed = fast\n")
            .unwrap();
        assert_eq!(config.scroll_speed, 2.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./definitely/not/here/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 800);
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let path = std::env::temp_dir().join(format!(
            "trolleyfork-config-{}.ini",
            std::process::id()
        ));
        let mut saved = GameConfig::with_path(&path);
        saved.cooldown_frames = 42;
        saved.scroll_speed = 3.5;
        saved.vsync = true;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, saved);
    }
}
