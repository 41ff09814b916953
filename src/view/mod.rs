mod controller;
pub mod fsm;
pub mod render;

pub use controller::ViewController;
pub use fsm::{Phase, RequestId, UiState, ViewEvent};
pub use render::{render, render_recipe};
