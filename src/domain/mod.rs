pub mod bearing;
pub mod forecast;
pub mod nearby;
pub mod weather;
pub mod weekday;
