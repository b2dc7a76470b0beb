#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod config;
pub mod dialogs;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod notification;
pub mod panels;
pub mod permission;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod texture_manager;
pub mod tools;

pub use app::SketchApp;
pub use canvas::DrawingCanvas;
pub use command::Command;
pub use config::SketchConfig;
pub use error::{SaveError, SaveResult, SurfaceError};
pub use file_handler::{ExportJob, FileHandler};
pub use input::{InputHandler, TouchEvent, TouchPhase};
pub use state::GestureState;
pub use stroke::Stroke;
pub use surface::Surface;
pub use tools::{BrushSettings, BrushSize, ShapeKind};
