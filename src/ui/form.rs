use std::cell::RefCell;
use std::rc::Rc;

use adw::Application;
use adw::prelude::*;
use gtk::gdk;
use gtk4 as gtk;
use log::{error, warn};

use crate::api::client::{ApiClient, Transport};
use crate::app::Settings;
use crate::verify::notice::Notice;
use crate::verify::query::QueryOrchestrator;

struct Form {
    name: gtk::Entry,
    passcode: gtk::Entry,
    phone: gtk::Entry,
    spinner: gtk::Spinner,
    overlay: adw::ToastOverlay,
    orch: RefCell<QueryOrchestrator>,
    client: ApiClient,
}

impl Form {
    /// Copy the entry texts into the orchestrator's record.
    fn pull(&self) {
        let mut orch = self.orch.borrow_mut();
        let input = orch.input_mut();
        input.name = self.name.text().to_string();
        input.passcode = self.passcode.text().to_string();
        input.phone = self.phone.text().to_string();
    }

    fn push(&self) {
        let orch = self.orch.borrow();
        let input = orch.input();
        self.name.set_text(&input.name);
        self.passcode.set_text(&input.passcode);
        self.phone.set_text(&input.phone);
    }

    fn notify(&self, notice: &Notice) {
        let toast = adw::Toast::new(&format!("{} · {}", notice.title(), notice.message()));
        self.overlay.add_toast(toast);
    }

    fn refresh_busy(&self) {
        self.spinner.set_spinning(self.orch.borrow().is_fetching());
    }

    fn submit(self: &Rc<Self>) {
        self.pull();
        let begun = self.orch.borrow_mut().begin();
        match begun {
            Err(notice) => self.notify(&notice),
            Ok((ticket, outbound)) => {
                let client = self.client.clone();
                let form = self.clone();
                crate::utils::run_async_to_main(
                    async move { client.send(outbound).await },
                    move |result| {
                        let notice = form.orch.borrow_mut().complete(ticket, result);
                        if let Some(notice) = notice {
                            form.notify(&notice);
                        }
                        form.refresh_busy();
                    },
                );
            }
        }
        self.refresh_busy();
    }

    fn paste(self: &Rc<Self>) {
        let clipboard = self.overlay.clipboard();
        let form = self.clone();
        glib::MainContext::default().spawn_local(async move {
            let text = match clipboard.read_text_future().await {
                Ok(text) => text.map(|t| t.to_string()),
                Err(e) => {
                    warn!("clipboard read failed: {e}");
                    None
                }
            };
            form.pull();
            let found = form.orch.borrow_mut().apply_clipboard(text.as_deref());
            if found {
                form.push();
                form.submit();
            }
        });
    }

    fn clear(&self) {
        let notice = self.orch.borrow_mut().clear();
        self.push();
        self.notify(&notice);
        self.refresh_busy();
    }
}

fn labelled_entry(form: &gtk::Box, title: &str, placeholder: &str) -> gtk::Entry {
    let label = gtk::Label::new(Some(title));
    label.set_halign(gtk::Align::Start);
    label.add_css_class("dim-label");
    let entry = gtk::Entry::new();
    entry.set_placeholder_text(Some(placeholder));
    entry.set_hexpand(true);
    form.append(&label);
    form.append(&entry);
    entry
}

pub fn show_form_window(app: &Application, settings: &Settings) {
    let client = match ApiClient::new(settings.timeout()) {
        Ok(client) => client,
        Err(e) => {
            error!("could not build HTTP client: {e}");
            app.quit();
            return;
        }
    };

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("통관고유부호 조회")
        .default_width(420)
        .default_height(360)
        .resizable(false)
        .build();

    let overlay = adw::ToastOverlay::new();

    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(24);
    root.set_margin_bottom(24);
    root.set_margin_start(24);
    root.set_margin_end(24);

    let fields = gtk::Box::new(gtk::Orientation::Vertical, 6);
    let name = labelled_entry(&fields, "이름", "홍길동");
    let passcode = labelled_entry(&fields, "통관고유부호", "P000000000000");
    let phone = labelled_entry(&fields, "전화번호", "010XXXXXXXX 또는 010-XXXX-XXXX");
    root.append(&fields);

    let actions = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    actions.set_halign(gtk::Align::End);
    let spinner = gtk::Spinner::new();
    let clear_btn = gtk::Button::with_label("초기화");
    let paste_btn = gtk::Button::with_label("클립보드에서 붙여넣기");
    let submit_btn = gtk::Button::with_label("조회");
    submit_btn.add_css_class("suggested-action");
    actions.append(&spinner);
    actions.append(&clear_btn);
    actions.append(&paste_btn);
    actions.append(&submit_btn);
    root.append(&actions);

    overlay.set_child(Some(&root));
    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    container.append(&header);
    container.append(&overlay);
    window.set_content(Some(&container));

    let form = Rc::new(Form {
        name: name.clone(),
        passcode: passcode.clone(),
        phone: phone.clone(),
        spinner,
        overlay,
        orch: RefCell::new(QueryOrchestrator::new(settings.endpoint_url())),
        client,
    });

    {
        let form = form.clone();
        submit_btn.connect_clicked(move |_| form.submit());
    }
    {
        let form = form.clone();
        paste_btn.connect_clicked(move |_| form.paste());
    }
    {
        let form = form.clone();
        clear_btn.connect_clicked(move |_| form.clear());
    }
    // Enter in any field submits
    for entry in [&name, &passcode, &phone] {
        let form = form.clone();
        entry.connect_activate(move |_| form.submit());
    }

    // Ctrl+Shift+V pastes, Ctrl+Shift+Backspace clears
    let keys = gtk::EventControllerKey::new();
    {
        let form = form.clone();
        keys.connect_key_pressed(move |_, keyval, _, state| {
            let chord = gdk::ModifierType::CONTROL_MASK | gdk::ModifierType::SHIFT_MASK;
            if !state.contains(chord) {
                return glib::Propagation::Proceed;
            }
            match keyval.to_lower() {
                gdk::Key::v => form.paste(),
                gdk::Key::BackSpace => form.clear(),
                _ => return glib::Propagation::Proceed,
            }
            glib::Propagation::Stop
        });
    }
    window.add_controller(keys);

    window.present();
}
