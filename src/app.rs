//! Main application UI.
//! Draws the deck selection screen and the card screen, forwarding user input to the `DeckViewer`.

use deck_viewer::{DeckViewer, Error, ViewerConfig};
use eframe::egui;
use egui::{Color32, RichText, Stroke};

const PANEL_BG: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
const BUTTON_BAR_BG: Color32 = Color32::from_rgb(0xe8, 0xe8, 0xe8);
const CARD_BORDER: Color32 = Color32::from_rgb(0xbb, 0xbb, 0xbb);

/// Application screen states
#[derive(Default, PartialEq)]
enum AppScreen {
    #[default]
    Selection,
    Card,
}

#[derive(Clone, Copy)]
enum NavAction {
    Previous,
    Flip,
    Next,
}

/// Load error shown over the selection screen until acknowledged
#[derive(Default)]
struct ErrorDialog {
    open: bool,
    title: &'static str,
    message: String,
}

impl ErrorDialog {
    fn show(&mut self, error: &Error) {
        self.title = error.title();
        self.message = error.to_string();
        self.open = true;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn dismiss(&mut self) {
        self.open = false;
    }
}

/// Main application state
pub struct MyApp {
    viewer: DeckViewer,
    config: ViewerConfig,
    current_screen: AppScreen,
    selected_deck: String,
    error_dialog: ErrorDialog,
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.current_screen {
            AppScreen::Selection => self.render_selection_screen(ctx),
            AppScreen::Card => self.render_card_screen(ctx),
        }

        if self.error_dialog.is_open() {
            let mut action_dismiss = ctx.input_mut(|i| {
                i.consume_key(egui::Modifiers::NONE, egui::Key::Enter)
                    || i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)
            });

            egui::Window::new(self.error_dialog.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(&self.error_dialog.message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        action_dismiss = true;
                    }
                });

            if action_dismiss {
                self.error_dialog.dismiss();
            }
        }
    }
}

impl MyApp {
    /// Creates the app on the selection screen with the first deck preselected
    pub fn new(cc: &eframe::CreationContext<'_>, viewer: DeckViewer, config: ViewerConfig) -> Self {
        deck_viewer::fonts::install(&cc.egui_ctx);
        Self::with_viewer(viewer, config)
    }

    fn with_viewer(viewer: DeckViewer, config: ViewerConfig) -> Self {
        let selected_deck = viewer.catalog().first_name().unwrap_or_default().to_string();
        Self {
            viewer,
            config,
            current_screen: AppScreen::Selection,
            selected_deck,
            error_dialog: ErrorDialog::default(),
        }
    }

    /// Renders the deck selection screen
    fn render_selection_screen(&mut self, ctx: &egui::Context) {
        let mut action_load = false;

        let input_enabled = !self.error_dialog.is_open();

        egui::CentralPanel::default().show(ctx, |ui| {
            // Everything under the error dialog stays disabled until it is dismissed
            ui.add_enabled_ui(input_enabled, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(80.0);
                    ui.label(RichText::new("Select a deck:").size(14.0));
                    ui.add_space(20.0);

                    egui::ComboBox::from_id_salt("deck_select")
                        .width(320.0)
                        .selected_text(RichText::new(&self.selected_deck).size(12.0))
                        .show_ui(ui, |ui| {
                            for name in self.viewer.catalog().names() {
                                ui.selectable_value(&mut self.selected_deck, name.to_string(), name);
                            }
                        });

                    ui.add_space(40.0);

                    let load_button = egui::Button::new(RichText::new("Load Deck").size(14.0));
                    if ui.add_sized([150.0, 44.0], load_button).clicked() {
                        action_load = true;
                    }
                });
            });
        });

        if input_enabled
            && ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter))
        {
            action_load = true;
        }

        // Execute deferred actions
        if action_load {
            self.handle_load();
        }
    }

    /// Renders the card screen with the flip area and navigation bar
    fn render_card_screen(&mut self, ctx: &egui::Context) {
        let mut action: Option<NavAction> = None;

        egui::TopBottomPanel::bottom("nav_bar")
            .exact_height(110.0)
            .frame(egui::Frame::none().fill(BUTTON_BAR_BG))
            .show(ctx, |ui| {
                ui.columns(3, |columns| {
                    let buttons = [
                        ("Previous", NavAction::Previous),
                        ("Flip", NavAction::Flip),
                        ("Next", NavAction::Next),
                    ];
                    for (column, (label, nav)) in columns.iter_mut().zip(buttons) {
                        column.vertical_centered(|ui| {
                            ui.add_space(25.0);
                            let button = egui::Button::new(RichText::new(label).size(16.0).strong());
                            if ui.add_sized([140.0, 56.0], button).clicked() {
                                action = Some(nav);
                            }
                        });
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(PANEL_BG).inner_margin(20.0))
            .show(ctx, |ui| {
                let deck_name = self
                    .viewer
                    .deck()
                    .map(|deck| deck.name.clone())
                    .unwrap_or_default();
                let position = self.viewer.position_label().unwrap_or_default();

                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(RichText::new(format!("Deck: {deck_name}")).size(12.0));
                    ui.label(RichText::new(position).size(11.0).weak());
                });
                ui.add_space(10.0);

                let Some(card) = self.viewer.render() else {
                    return;
                };

                let response = egui::Frame::none()
                    .fill(Color32::WHITE)
                    .stroke(Stroke::new(1.0, CARD_BORDER))
                    .outer_margin(egui::Margin::symmetric(40.0, 10.0))
                    .inner_margin(egui::Margin::symmetric(20.0, 20.0))
                    .show(ui, |ui| {
                        ui.set_min_size(ui.available_size());
                        ui.centered_and_justified(|ui| {
                            ui.set_max_width(self.config.card_wrap_width);
                            let text = RichText::new(&card.text)
                                .size(card.font_size)
                                .strong()
                                .color(Color32::BLACK);
                            ui.add(egui::Label::new(text).wrap().selectable(false));
                        });
                    })
                    .response
                    .interact(egui::Sense::click());

                if response.clicked() {
                    action = Some(NavAction::Flip);
                }
            });

        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                action = Some(NavAction::Previous);
            } else if i.key_pressed(egui::Key::ArrowRight) {
                action = Some(NavAction::Next);
            } else if i.key_pressed(egui::Key::Space) {
                action = Some(NavAction::Flip);
            }
        });

        // Execute deferred actions
        match action {
            Some(NavAction::Previous) => self.viewer.previous(),
            Some(NavAction::Flip) => self.viewer.flip(),
            Some(NavAction::Next) => self.viewer.next(),
            None => {}
        }
    }

    /// Loads the selected deck, switching to the card screen on success
    fn handle_load(&mut self) {
        if self.selected_deck.is_empty() || self.error_dialog.is_open() {
            return;
        }

        match self.viewer.load(&self.selected_deck) {
            Ok(()) => {
                self.current_screen = AppScreen::Card;
            }
            Err(e) => self.show_error(e),
        }
    }

    fn show_error(&mut self, error: Error) {
        log::warn!("{error}");
        self.error_dialog.show(&error);
    }
}
