//! Display methods for SettingsUI.
//
//! Contains: show() and the form rows.

use egui::{Color32, Context, Window};

use code_glance_config::{Alignment, JumpTrigger, RenderStyle, color, defaults};

use crate::SettingsAction;
use crate::scroll;
use crate::section::{
    COMBO_WIDTH, CONTROL_HEIGHT, INPUT_WIDTH, SPINNER_WIDTH, section_heading, section_spacing,
};
use crate::settings_ui::SettingsUI;

impl SettingsUI {
    /// Draw one frame of the settings window and report what the host
    /// should do with the result.
    pub fn show(&mut self, ctx: &Context) -> SettingsAction {
        if !self.visible {
            return SettingsAction::None;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.visible = false;
            return SettingsAction::Close;
        }

        let mut save_requested = false;
        let mut apply_requested = false;
        let mut discard_requested = false;
        let mut close_requested = false;
        let mut open = true;

        Window::new("Settings")
            .resizable(false)
            .default_width(380.0)
            .open(&mut open)
            .show(ctx, |ui| {
                section_heading(ui, "Minimap Settings");
                ui.separator();

                self.show_form(ui);

                section_spacing(ui);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        save_requested = true;
                    }
                    if ui.button("Apply").clicked() {
                        apply_requested = true;
                    }
                    if ui.button("Discard").clicked() {
                        discard_requested = true;
                    }
                    if ui.button("Close").clicked() {
                        close_requested = true;
                    }
                    if self.has_changes {
                        ui.colored_label(Color32::YELLOW, "* Unsaved changes");
                    }
                });
            });

        if !open || close_requested {
            self.visible = false;
            return SettingsAction::Close;
        }

        if discard_requested {
            let baseline = self.baseline.clone();
            self.reset_from(&baseline);
            return SettingsAction::None;
        }

        if save_requested || apply_requested {
            let committed = self.committed_config();
            self.baseline = committed.clone();
            self.has_changes = false;
            return if save_requested {
                log::info!("Minimap settings saved");
                SettingsAction::Save(committed)
            } else {
                log::info!("Minimap settings applied");
                SettingsAction::Apply(committed)
            };
        }

        SettingsAction::None
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        if ui
            .checkbox(&mut self.config.disabled, "Disable minimap")
            .changed()
        {
            self.has_changes = true;
        }

        self.show_pixels_per_line_row(ui);
        self.show_jump_trigger_row(ui);
        self.show_width_row(ui);
        self.show_viewport_color_row(ui);

        self.show_spinner_row(
            ui,
            "Minimum lines count:",
            Field::MinLineCount,
            "Minimum number of lines to show the minimap",
        );
        self.show_spinner_row(
            ui,
            "Minimum window width:",
            Field::MinWindowWidth,
            "Hide the minimap when the editor window is narrower than this",
        );

        self.show_render_style_row(ui);
        self.show_alignment_row(ui);
    }

    fn show_pixels_per_line_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Pixels per line:");
            let current = self.config.pixels_per_line;
            let mut selected = current;
            let combo = egui::ComboBox::from_id_salt("minimap_pixels_per_line")
                .width(COMBO_WIDTH)
                .selected_text(current.to_string())
                .show_ui(ui, |ui| {
                    for px in defaults::PIXELS_PER_LINE_OPTIONS {
                        ui.selectable_value(&mut selected, px, px.to_string());
                    }
                });

            let rotation = scroll::hovered_rotation(ui, &combo.response);
            if rotation != 0 {
                let options = &defaults::PIXELS_PER_LINE_OPTIONS;
                let index = options.iter().position(|px| *px == selected).unwrap_or(0);
                selected = options[scroll::adjust_selection(index, options.len(), rotation)];
            }

            if selected != current {
                self.config.pixels_per_line = selected;
                self.has_changes = true;
            }
        });
    }

    fn show_jump_trigger_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Jump to position on:");
            let current = JumpTrigger::from(self.config.jump_on_mouse_down);
            let mut selected = current;
            let combo = egui::ComboBox::from_id_salt("minimap_jump_trigger")
                .width(COMBO_WIDTH)
                .selected_text(current.display_name())
                .show_ui(ui, |ui| {
                    for trigger in JumpTrigger::all() {
                        ui.selectable_value(&mut selected, *trigger, trigger.display_name());
                    }
                });

            let rotation = scroll::hovered_rotation(ui, &combo.response);
            if rotation != 0 {
                selected = JumpTrigger::from_index(scroll::adjust_selection(
                    selected.index(),
                    JumpTrigger::all().len(),
                    rotation,
                ));
            }

            if selected != current {
                self.config.jump_on_mouse_down = selected.on_mouse_down();
                self.has_changes = true;
            }
        });
    }

    fn show_width_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Width:");
            let response = ui.add_sized(
                [SPINNER_WIDTH, CONTROL_HEIGHT],
                egui::DragValue::new(&mut self.config.width)
                    .range(defaults::WIDTH_MIN..=defaults::WIDTH_MAX)
                    .clamp_existing_to_range(false)
                    .speed(1)
                    .suffix(" px"),
            );
            if response.changed() {
                self.has_changes = true;
            }

            let rotation = scroll::hovered_rotation(ui, &response);
            if rotation != 0 {
                let modifiers = ui.input(|i| i.modifiers);
                let adjusted = scroll::adjust_value(
                    self.config.width,
                    defaults::WIDTH_STEP,
                    modifiers,
                    defaults::WIDTH_MIN..=defaults::WIDTH_MAX,
                    rotation,
                );
                if adjusted != self.config.width {
                    self.config.width = adjusted;
                    self.has_changes = true;
                }
            }

            if ui
                .checkbox(&mut self.config.locked, "Lock")
                .on_hover_text("Prevent resizing the minimap by dragging its gutter")
                .changed()
            {
                self.has_changes = true;
            }
        });
    }

    fn show_viewport_color_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Viewport color:");
            let mut edit = egui::TextEdit::singleline(&mut self.temp_viewport_color)
                .desired_width(INPUT_WIDTH)
                .hint_text("A0A0A0");
            if self.viewport_color_error.is_some() {
                edit = edit.text_color(Color32::RED);
            }
            let response = ui.add(edit);
            if response.changed() {
                self.has_changes = true;
            }

            // Advisory validation: flag bad text when the field loses
            // focus, but keep it editable and readable as typed.
            if response.lost_focus() {
                self.viewport_color_error = if color::is_valid_hex(&self.temp_viewport_color) {
                    None
                } else {
                    Some("Expected six hex digits, e.g. A0A0A0".to_string())
                };
            }

            if let Some(rgb) = color::parse_hex(&self.temp_viewport_color) {
                let preview = Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(CONTROL_HEIGHT, CONTROL_HEIGHT), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, preview);
            }
        });
        if let Some(ref err) = self.viewport_color_error {
            ui.colored_label(Color32::RED, err);
        }
    }

    fn show_spinner_row(&mut self, ui: &mut egui::Ui, label: &str, field: Field, hover: &str) {
        let (step, range) = field.step_and_range();
        ui.horizontal(|ui| {
            ui.label(label).on_hover_text(hover);
            let value = field.get(self);
            let mut edited = value;
            let response = ui.add_sized(
                [SPINNER_WIDTH, CONTROL_HEIGHT],
                egui::DragValue::new(&mut edited)
                    .range(range.clone())
                    .clamp_existing_to_range(false)
                    .speed(1),
            );
            if response.changed() && edited != value {
                field.set(self, edited);
                self.has_changes = true;
            }

            let rotation = scroll::hovered_rotation(ui, &response);
            if rotation != 0 {
                let modifiers = ui.input(|i| i.modifiers);
                let adjusted = scroll::adjust_value(field.get(self), step, modifiers, range, rotation);
                if adjusted != field.get(self) {
                    field.set(self, adjusted);
                    self.has_changes = true;
                }
            }
        });
    }

    fn show_render_style_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Render style:");
            let current = RenderStyle::from(self.config.clean);
            let mut selected = current;
            let combo = egui::ComboBox::from_id_salt("minimap_render_style")
                .width(COMBO_WIDTH)
                .selected_text(current.display_name())
                .show_ui(ui, |ui| {
                    for style in RenderStyle::all() {
                        ui.selectable_value(&mut selected, *style, style.display_name());
                    }
                });

            let rotation = scroll::hovered_rotation(ui, &combo.response);
            if rotation != 0 {
                selected = RenderStyle::from_index(scroll::adjust_selection(
                    selected.index(),
                    RenderStyle::all().len(),
                    rotation,
                ));
            }

            if selected != current {
                self.config.clean = selected.is_clean();
                self.has_changes = true;
            }
        });
    }

    fn show_alignment_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Alignment:")
                .on_hover_text("Takes effect after the editor restarts");
            let current = Alignment::from(self.config.right_aligned);
            let mut selected = current;
            let combo = egui::ComboBox::from_id_salt("minimap_alignment")
                .width(COMBO_WIDTH)
                .selected_text(current.display_name())
                .show_ui(ui, |ui| {
                    for alignment in Alignment::all() {
                        ui.selectable_value(&mut selected, *alignment, alignment.display_name());
                    }
                });

            let rotation = scroll::hovered_rotation(ui, &combo.response);
            if rotation != 0 {
                selected = Alignment::from_index(scroll::adjust_selection(
                    selected.index(),
                    Alignment::all().len(),
                    rotation,
                ));
            }

            if selected != current {
                self.config.right_aligned = selected.is_right();
                self.has_changes = true;
            }
        });
    }
}

/// The spinner-backed threshold fields, so the row code can be shared
/// without borrowing `SettingsUI` mutably across the closure. Width has
/// its own row because of the adjacent Lock checkbox.
#[derive(Clone, Copy)]
enum Field {
    MinLineCount,
    MinWindowWidth,
}

impl Field {
    fn step_and_range(self) -> (u32, std::ops::RangeInclusive<u32>) {
        match self {
            Field::MinLineCount => (
                defaults::MIN_LINE_COUNT_STEP,
                defaults::MIN_LINE_COUNT_MIN..=defaults::MIN_LINE_COUNT_MAX,
            ),
            Field::MinWindowWidth => (
                defaults::MIN_WINDOW_WIDTH_STEP,
                defaults::MIN_WINDOW_WIDTH_MIN..=defaults::MIN_WINDOW_WIDTH_MAX,
            ),
        }
    }

    fn get(self, settings: &SettingsUI) -> u32 {
        match self {
            Field::MinLineCount => settings.config.min_line_count,
            Field::MinWindowWidth => settings.config.min_window_width,
        }
    }

    fn set(self, settings: &mut SettingsUI, value: u32) {
        match self {
            Field::MinLineCount => settings.config.min_line_count = value,
            Field::MinWindowWidth => settings.config.min_window_width = value,
        }
    }
}
