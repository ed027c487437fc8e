pub mod form;

use adw::Application;
use adw::prelude::*;

use crate::app::Settings;

pub fn run(settings: Settings) {
    let app = Application::builder()
        .application_id("kr.unipass.Check")
        .build();
    app.connect_activate(move |app| {
        crate::ui::form::show_form_window(app, &settings);
    });
    // Arguments were already handled by clap; keep GTK from parsing them.
    app.run_with_args::<&str>(&[]);
}
