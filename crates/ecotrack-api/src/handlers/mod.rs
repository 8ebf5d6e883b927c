mod aqi;
mod cities;
mod estimate;
mod health;
mod history;
mod progress;

pub use aqi::{classify_aqi, current_aqi};
pub use cities::{city_legend, city_summary, get_city, list_cities};
pub use estimate::estimate;
pub use health::health_check;
pub use history::list_history;
pub use progress::{get_progress, migrate_history};
