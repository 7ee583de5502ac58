use crate::assistant;
use crate::router::Page;
use crate::session::{AuthScreen, Credentials, Registration};
use crate::settings::{save_settings, Settings};
use crate::shell::AppShell;
use crate::theme::{
    apply_theme, ensure_theme_files, load_presets, load_theme, parse_color, ThemeConfig,
};
use eframe::{
    egui::{
        self, Align, CentralPanel, Context, Layout, ProgressBar, RichText, ScrollArea, SidePanel,
        TopBottomPanel,
    },
    App, CreationContext,
};
use std::path::PathBuf;

const LEARNING_MODULES: [(&str, &str); 5] = [
    (
        "Fire Safety Basics",
        "Spotting hazards, raising the alarm, and leaving the building calmly.",
    ),
    (
        "Earthquake Drill",
        "Drop, cover, hold on. What to do during and after the shaking.",
    ),
    (
        "First Aid Essentials",
        "Helping a classmate safely until an adult or medic arrives.",
    ),
    (
        "Road & Transport Safety",
        "Bus queues, crossings, and cycling to school.",
    ),
    (
        "Stranger Awareness",
        "Recognising unsafe situations and who to tell.",
    ),
];

pub struct KavachApp {
    settings: Settings,
    base_path: PathBuf,
    shell: AppShell,
    theme: ThemeConfig,
    presets: Vec<ThemeConfig>,
    login_form: Credentials,
    register_form: Registration,
    reset_email: String,
    reset_notice: Option<String>,
    chat_input: String,
    chat_log: Vec<(String, String)>,
    sos_notice: Option<String>,
}

impl KavachApp {
    pub fn new(cc: &CreationContext<'_>, base_path: PathBuf, settings: Settings) -> Self {
        if let Err(e) = ensure_theme_files(&base_path) {
            log::warn!("could not write theme presets: {e}");
        }
        let presets = load_presets(&base_path);
        let theme = load_theme(&base_path, settings.ui.last_theme.as_deref());
        apply_theme(&theme, &cc.egui_ctx);

        Self {
            settings,
            base_path,
            shell: AppShell::new(),
            theme,
            presets,
            login_form: Credentials::default(),
            register_form: Registration::default(),
            reset_email: String::new(),
            reset_notice: None,
            chat_input: String::new(),
            chat_log: Vec::new(),
            sos_notice: None,
        }
    }

    fn switch_theme(&mut self, name: &str, ctx: &Context) {
        self.theme = load_theme(&self.base_path, Some(name));
        apply_theme(&self.theme, ctx);
        self.settings.ui.last_theme = Some(self.theme.name.clone());
        if let Err(e) = save_settings(&self.settings, &self.base_path) {
            log::warn!("could not save theme choice: {e}");
        }
    }

    fn muted(&self, text: impl Into<String>) -> RichText {
        RichText::new(text.into()).color(parse_color(&self.theme.muted_text))
    }

    fn clear_auth_forms(&mut self) {
        self.login_form = Credentials::default();
        self.register_form = Registration::default();
        self.reset_email.clear();
        self.reset_notice = None;
    }

    // ---- auth flow ----

    fn render_auth(&mut self, ui: &mut egui::Ui) {
        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(360.0);
            ui.heading("Suraksha Kavach");
            ui.label(self.muted("School safety, taught before it's needed."));
            ui.add_space(16.0);
            match self.shell.auth_screen() {
                AuthScreen::Login => self.render_login(ui),
                AuthScreen::Register => self.render_register(ui),
                AuthScreen::ForgotPassword => self.render_forgot_password(ui),
            }
        });
    }

    fn render_login(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Sign in").strong());
        ui.add(
            egui::TextEdit::singleline(&mut self.login_form.email)
                .hint_text("you@school.edu")
                .desired_width(f32::INFINITY),
        );
        ui.add(
            egui::TextEdit::singleline(&mut self.login_form.password)
                .password(true)
                .hint_text("Password")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);
        if ui.button("Sign In").clicked() {
            let form = self.login_form.clone();
            match self.shell.login(&form) {
                Ok(()) => self.clear_auth_forms(),
                Err(e) => log::warn!("login rejected: {e}"),
            }
        }
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.small_button("Create an account").clicked() {
                self.shell.show_auth_screen(AuthScreen::Register);
            }
            if ui.small_button("Forgot password?").clicked() {
                self.shell.show_auth_screen(AuthScreen::ForgotPassword);
            }
        });
    }

    fn render_register(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Create your account").strong());
        ui.add(
            egui::TextEdit::singleline(&mut self.register_form.name)
                .hint_text("Full name")
                .desired_width(f32::INFINITY),
        );
        ui.add(
            egui::TextEdit::singleline(&mut self.register_form.email)
                .hint_text("you@school.edu")
                .desired_width(f32::INFINITY),
        );
        ui.add(
            egui::TextEdit::singleline(&mut self.register_form.school)
                .hint_text("School")
                .desired_width(f32::INFINITY),
        );
        ui.add(
            egui::TextEdit::singleline(&mut self.register_form.password)
                .password(true)
                .hint_text("Password")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);
        if ui.button("Create Account").clicked() {
            let form = self.register_form.clone();
            match self.shell.register(&form) {
                Ok(()) => self.clear_auth_forms(),
                Err(e) => log::warn!("registration rejected: {e}"),
            }
        }
        ui.add_space(8.0);
        if ui.small_button("Back to sign in").clicked() {
            self.shell.show_auth_screen(AuthScreen::Login);
        }
    }

    fn render_forgot_password(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Reset your password").strong());
        ui.add(
            egui::TextEdit::singleline(&mut self.reset_email)
                .hint_text("you@school.edu")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);
        if ui.button("Send reset link").clicked() {
            // No mail backend exists; this stays a visible stub.
            self.reset_notice = Some(format!(
                "A reset link would be sent to {} once accounts are wired to a backend.",
                self.reset_email.trim()
            ));
        }
        if let Some(notice) = &self.reset_notice {
            ui.add_space(4.0);
            ui.label(self.muted(notice.clone()));
        }
        ui.add_space(8.0);
        if ui.small_button("Back to sign in").clicked() {
            self.shell.show_auth_screen(AuthScreen::Login);
        }
    }

    // ---- authenticated shell ----

    fn render_header(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Suraksha Kavach");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                self.render_profile_menu(ui);
                self.render_settings_menu(ctx, ui);
            });
        });
    }

    fn render_settings_menu(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        ui.menu_button("Settings", |ui| {
            ui.add_enabled(false, egui::Button::new("Notification Preferences"));
            ui.menu_button("Change Theme", |ui| {
                let names: Vec<String> = self.presets.iter().map(|p| p.name.clone()).collect();
                for name in names {
                    let selected = self.theme.name == name;
                    if ui.selectable_label(selected, name.clone()).clicked() {
                        self.switch_theme(&name, ctx);
                        ui.close_menu();
                    }
                }
            });
            ui.add_enabled(false, egui::Button::new("Privacy Settings"));
        });
    }

    fn render_profile_menu(&mut self, ui: &mut egui::Ui) {
        let Some(display_name) = self.shell.profile().map(|p| p.name.clone()) else {
            return;
        };
        ui.menu_button(display_name, |ui| {
            ui.set_min_width(260.0);
            let editing = self.shell.editor().map(|e| e.is_editing()).unwrap_or(false);
            if editing {
                self.render_profile_edit_form(ui);
            } else {
                self.render_profile_summary(ui);
            }
        });
    }

    fn render_profile_summary(&mut self, ui: &mut egui::Ui) {
        if let Some(profile) = self.shell.profile() {
            ui.label(RichText::new(&profile.name).strong());
            ui.label(self.muted(profile.email.clone()));
            ui.label(self.muted(profile.school.clone()));
        }
        ui.separator();
        if ui.button("Edit Profile").clicked() {
            if let Some(editor) = self.shell.editor_mut() {
                editor.begin_edit();
            }
        }
        if ui.button("Log out").clicked() {
            self.shell.logout();
            self.chat_log.clear();
            self.chat_input.clear();
            self.sos_notice = None;
            ui.close_menu();
        }
    }

    fn render_profile_edit_form(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Edit Profile").strong());
        let Some(editor) = self.shell.editor_mut() else {
            return;
        };
        if let Some(draft) = editor.draft_mut() {
            ui.label("Name");
            ui.text_edit_singleline(&mut draft.name);
            ui.label("Email");
            ui.text_edit_singleline(&mut draft.email);
            ui.label("School");
            ui.text_edit_singleline(&mut draft.school);
        }
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                editor.save();
                ui.close_menu();
            }
            if ui.button("Cancel").clicked() {
                editor.cancel();
                ui.close_menu();
            }
        });
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        for page in Page::ALL {
            let active = self.shell.current_page() == page;
            if ui.selectable_label(active, page.label()).clicked() {
                self.shell.go(page);
            }
        }
    }

    fn render_page(&mut self, ui: &mut egui::Ui) {
        match self.shell.current_page() {
            Page::Home => self.render_home(ui),
            Page::Dashboard => self.render_dashboard(ui),
            Page::Modules => self.render_modules(ui),
            Page::AiChat => self.render_ai_chat(ui),
            Page::EvacuationMap => self.render_evacuation_map(ui),
            Page::Sos => self.render_sos(ui),
        }
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        let (name, school) = match self.shell.profile() {
            Some(p) => (p.name.clone(), p.school.clone()),
            None => return,
        };
        ui.heading(format!("Welcome back, {name}"));
        ui.label(self.muted(school));
        ui.add_space(12.0);
        ui.label("Pick up where you left off:");
        ui.horizontal_wrapped(|ui| {
            if ui.button("Continue Learning Modules").clicked() {
                self.shell.go(Page::Modules);
            }
            if ui.button("Ask the AI Assistant").clicked() {
                self.shell.go(Page::AiChat);
            }
            if ui.button("Review the Evacuation Map").clicked() {
                self.shell.go(Page::EvacuationMap);
            }
            if ui.button("Emergency SOS").clicked() {
                self.shell.go(Page::Sos);
            }
        });
        ui.add_space(12.0);
        ui.separator();
        ui.label(self.muted(
            "Tip: most injuries during school emergencies happen in the first two minutes. \
             Knowing your route beats guessing it.",
        ));
    }

    fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.heading("Dashboard");
        ui.label(self.muted("Your safety-learning progress at a glance."));
        ui.add_space(8.0);
        for (i, (title, _)) in LEARNING_MODULES.iter().enumerate() {
            // Placeholder progress until module tracking lands.
            let progress = 1.0 - (i as f32 / LEARNING_MODULES.len() as f32);
            ui.label(*title);
            ui.add(ProgressBar::new(progress).text(format!("{:.0}%", progress * 100.0)));
            ui.add_space(4.0);
        }
    }

    fn render_modules(&mut self, ui: &mut egui::Ui) {
        ui.heading("Learning Modules");
        ui.add_space(8.0);
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            for (title, blurb) in LEARNING_MODULES {
                ui.label(RichText::new(title).strong());
                ui.label(self.muted(blurb));
                ui.add_enabled(false, egui::Button::new("Start module"));
                ui.separator();
            }
        });
    }

    fn render_ai_chat(&mut self, ui: &mut egui::Ui) {
        ui.heading("AI Assistant");
        ui.label(self.muted("Ask about drills, routes, or anything from the modules."));
        ui.add_space(6.0);

        TopBottomPanel::bottom("chat_input")
            .show_separator_line(false)
            .show_inside(ui, |ui| {
                ui.horizontal(|ui| {
                    let input = ui.add(
                        egui::TextEdit::singleline(&mut self.chat_input)
                            .hint_text("Type a question...")
                            .desired_width(ui.available_width() - 70.0),
                    );
                    let submitted =
                        input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Send").clicked() || submitted {
                        self.handle_chat_send();
                    }
                });
            });

        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for (sender, msg) in &self.chat_log {
                    ui.label(RichText::new(sender).strong());
                    ui.label(msg);
                    ui.add_space(4.0);
                }
            });
    }

    fn handle_chat_send(&mut self) {
        let question = self.chat_input.trim().to_string();
        if question.is_empty() {
            return;
        }
        let reply = assistant::placeholder_reply(&question);
        self.chat_log.push(("You".to_string(), question));
        self.chat_log.push(("Kavach".to_string(), reply));
        self.chat_input.clear();
    }

    fn render_evacuation_map(&mut self, ui: &mut egui::Ui) {
        ui.heading("Evacuation Map");
        ui.label(self.muted(
            "Your school's floor plan appears here once an administrator uploads it.",
        ));
        ui.add_space(8.0);
        ui.label(RichText::new("Assembly points").strong());
        ui.label("A - Main playground (primary)");
        ui.label("B - Staff parking, far gate (if A is blocked)");
        ui.label("C - Community hall across the road (off-site)");
    }

    fn render_sos(&mut self, ui: &mut egui::Ui) {
        ui.heading(RichText::new("Emergency SOS").color(parse_color(&self.theme.danger)));
        ui.label(self.muted("Only for real emergencies. Alert an adult first if one is nearby."));
        ui.add_space(12.0);
        if ui.button("Call emergency services (112)").clicked() {
            self.sos_notice = Some("Dialing is not wired up yet. Use a phone: 112.".to_string());
        }
        if ui.button("Alert the school office").clicked() {
            self.sos_notice =
                Some("Office alerts need the school backend. Go to the office in person.".to_string());
        }
        if let Some(notice) = &self.sos_notice {
            ui.add_space(8.0);
            ui.colored_label(parse_color(&self.theme.danger), notice);
        }
    }
}

impl App for KavachApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let size = ctx.input(|i| i.screen_rect().size());
        self.settings.ui.window_size = Some((size.x, size.y));

        if !self.shell.is_authenticated() {
            CentralPanel::default().show(ctx, |ui| self.render_auth(ui));
            return;
        }

        TopBottomPanel::top("header").show(ctx, |ui| self.render_header(ctx, ui));
        SidePanel::left("sidebar")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| self.render_sidebar(ui));
        CentralPanel::default().show(ctx, |ui| self.render_page(ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = save_settings(&self.settings, &self.base_path) {
            log::warn!("could not save settings on exit: {e}");
        }
    }
}

pub fn launch_gui(base_path: PathBuf, settings: Settings) -> eframe::Result<()> {
    let (w, h) = settings.ui.window_size.unwrap_or((1100.0, 720.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Suraksha Kavach")
            .with_inner_size([w, h])
            .with_min_inner_size([880.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Suraksha Kavach",
        native_options,
        Box::new(move |cc| Box::new(KavachApp::new(cc, base_path, settings))),
    )
}
