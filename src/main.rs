// uCalendar
// Main entry point

use ucalendar::services::settings::ConfigService;
use ucalendar::ui_egui::CalendarApp;

const MIN_WIDTH: f32 = 640.0;
const MIN_HEIGHT: f32 = 480.0;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting uCalendar");

    let config = ConfigService::from_platform().load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("uCalendar")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([MIN_WIDTH, MIN_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "uCalendar",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, config)?))),
    )
}
