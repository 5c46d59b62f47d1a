use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::constants::surface;
use crate::diagram::DiagramService;
use crate::panel::{ControlPanel, ControlPanelAction};
use crate::render::DiagramScene;
use crate::ui::theme::colors;

pub struct ControlPanelUiPlugin;

impl Plugin for ControlPanelUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            (draw_control_panel, draw_confirm_dialog),
        );
    }
}

/// Side bar with one combo box per selection list and the select button
fn draw_control_panel(
    mut contexts: EguiContexts,
    panel: Res<ControlPanel>,
    service: Res<DiagramService>,
    scene: Res<DiagramScene>,
    mut actions: MessageWriter<ControlPanelAction>,
) -> Result {
    if !panel.is_bound() {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let model = service.current();

    egui::SidePanel::left("diagram_control_panel")
        .exact_width(surface::PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("DIAGRAM")
                    .strong()
                    .color(colors::ACCENT_BLUE),
            );
            ui.separator();

            egui::Grid::new("diagram_selection_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    for list in panel.option_lists() {
                        let (current_key, current_name) = list.selector.current(&model);
                        let mut selected = current_key;

                        ui.label(
                            egui::RichText::new(list.selector.label()).color(colors::TEXT_SECONDARY),
                        );
                        egui::ComboBox::from_id_salt(list.selector.label())
                            .selected_text(current_name)
                            .show_ui(ui, |ui| {
                                for (key, name) in &list.options {
                                    ui.selectable_value(&mut selected, *key, *name);
                                }
                            });
                        ui.end_row();

                        if selected != current_key {
                            actions.write(ControlPanelAction::Select {
                                selector: list.selector,
                                key: selected.to_string(),
                            });
                        }
                    }
                });

            ui.add_space(8.0);
            if ui.button("Select").clicked() {
                actions.write(ControlPanelAction::Confirm);
            }

            if scene.is_loading() {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Loading texture...")
                        .small()
                        .color(colors::STATUS_WARNING),
                );
            } else if !scene.has_mesh() {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("No preview")
                        .small()
                        .color(colors::TEXT_MUTED),
                );
            }
        });

    Ok(())
}

/// Modal showing the serialized selection
fn draw_confirm_dialog(
    mut contexts: EguiContexts,
    panel: Res<ControlPanel>,
    mut actions: MessageWriter<ControlPanelAction>,
) -> Result {
    let Some(text) = panel.confirmation() else {
        return Ok(());
    };

    let ctx = contexts.ctx_mut()?;
    let mut open = true;
    let mut close_clicked = false;

    egui::Window::new("Confirm Selection")
        .id(egui::Id::new("select_confirm_modal"))
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .monospace()
                    .color(colors::ACCENT_GREEN),
            );
            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                close_clicked = ui.button("Close").clicked();
            });
        });

    if !open || close_clicked {
        actions.write(ControlPanelAction::Dismiss);
    }

    Ok(())
}
