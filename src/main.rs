mod ui;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = ui::settings_io::load_settings();
    let title = settings.window_title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1101.0, 831.0])
            .with_min_inner_size([901.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| {
            Ok(Box::new(ui::app::HubApp::new(settings)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to open the hub window: {err}"))
}
