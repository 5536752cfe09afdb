pub mod presets;
pub mod run;
