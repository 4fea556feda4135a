mod layout;
mod renderer;
mod state;
pub mod theme;
mod widgets;

pub use layout::{HitTarget, OverlayLayout};
pub use renderer::render;
pub use state::AppState;
pub use theme::Theme;
