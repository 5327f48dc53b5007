mod menu;
mod quiz;
mod result;
mod state;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use menu::MenuView;
pub use quiz::QuizView;
pub use result::ResultView;
pub use state::ViewError;
pub use welcome::WelcomeView;
