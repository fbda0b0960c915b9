use eframe::egui;
use env_logger;
use log::{info, error};

mod app;
mod data;
mod ui;

use app::GoalGroveApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting GoalGrove egui application");

    // Create window options sized for the dashboard layout
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])  // Room for the summary row + sections
            .with_min_inner_size([800.0, 600.0])   // Minimum usable size
            .with_max_inner_size([1600.0, 1200.0]) // Prevent it from getting too big
            .with_title("GoalGrove")
            .with_resizable(true),
        ..Default::default()
    };

    // Run the application
    info!("Launching egui window");
    eframe::run_native(
        "GoalGrove",
        options,
        Box::new(|cc| {
            // Initialize the app, restoring persisted preferences
            match GoalGroveApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized GoalGrove app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
