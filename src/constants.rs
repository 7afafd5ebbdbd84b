//! Default tuning values for the annotation engine

/// Scale change per unit of wheel delta
pub const DEFAULT_WHEEL_ZOOM_SPEED: f32 = 0.005;

/// Multiplicative step for the zoom in/out buttons
pub const DEFAULT_BUTTON_ZOOM_FACTOR: f32 = 1.2;

/// Pointer travel (pixels) below which a press-release is a click
pub const DEFAULT_CLICK_THRESHOLD_PX: f32 = 5.0;

/// Minimum width and height (percent) of a committed shape or markup
pub const DEFAULT_MIN_COMMIT_SIZE: f32 = 1.0;

/// Side of the square hit box around each resize handle
pub const DEFAULT_HANDLE_HIT_SIZE_PX: f32 = 14.0;

/// Pin marker width
pub const DEFAULT_PIN_HIT_WIDTH_PX: f32 = 40.0;

/// Pin marker height
pub const DEFAULT_PIN_HIT_HEIGHT_PX: f32 = 40.0;
