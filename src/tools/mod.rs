// Small single-purpose calculators and generators

pub mod age;
pub mod error;
pub mod finance;
pub mod health;
pub mod password;

pub use age::{age_on, age_today, parse_date, Age};
pub use error::ToolError;
pub use finance::{gst, gst_from_text, split_tip, GstBreakdown, GstMode, TipSplit};
pub use health::{bmi, Bmi, BmiBand};
pub use password::{generate_password, generate_password_with};
