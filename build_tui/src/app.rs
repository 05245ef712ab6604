//! Application state

use crate::theme::{load_theme, Theme, ThemeStore, THEME_KEY};
use build_core::{CharacterBuild, ClassTier, GearSlot, PrimaryStat};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Build,
    Attributes,
    Equipment,
    Stats,
    Breakdown,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Build,
            Tab::Attributes,
            Tab::Equipment,
            Tab::Stats,
            Tab::Breakdown,
            Tab::Help,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Build => "Build",
            Tab::Attributes => "Attrs",
            Tab::Equipment => "Equip",
            Tab::Stats => "Stats",
            Tab::Breakdown => "Calc",
            Tab::Help => "Help",
        }
    }
}

/// Picker column on the Build tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildFocus {
    Race,
    Class(ClassTier),
}

impl BuildFocus {
    pub fn all() -> &'static [BuildFocus] {
        &[
            BuildFocus::Race,
            BuildFocus::Class(ClassTier::Base),
            BuildFocus::Class(ClassTier::Super),
            BuildFocus::Class(ClassTier::Sub),
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            BuildFocus::Race => "Race",
            BuildFocus::Class(ClassTier::Base) => "Base Class",
            BuildFocus::Class(ClassTier::Super) => "Super Class",
            BuildFocus::Class(ClassTier::Sub) => "Sub Class",
        }
    }

    pub fn index(&self) -> usize {
        BuildFocus::all()
            .iter()
            .position(|f| f == self)
            .unwrap_or(0)
    }
}

/// Equipment panel focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipFocus {
    Slots,
    Items,
}

pub struct App {
    pub current_tab: Tab,
    pub build: CharacterBuild,
    pub theme: Theme,
    theme_store: Box<dyn ThemeStore>,
    pub show_help: bool,
    /// Last action result shown in the title bar
    pub status: Option<String>,
    // Build tab state
    pub build_focus: BuildFocus,
    pub picker_cursor: [usize; 4],
    // Attributes tab state
    pub selected_stat: usize,
    pub attr_input: Option<String>,
    // Equipment tab state
    pub equip_focus: EquipFocus,
    pub selected_slot: usize,
    pub selected_item: usize,
    // Scroll state
    pub stats_scroll: usize,
    pub breakdown_scroll: usize,
}

impl App {
    pub fn new(build: CharacterBuild, theme_store: Box<dyn ThemeStore>) -> Self {
        let theme = load_theme(theme_store.as_ref());
        App {
            current_tab: Tab::Build,
            build,
            theme,
            theme_store,
            show_help: false,
            status: None,
            build_focus: BuildFocus::Race,
            picker_cursor: [0; 4],
            selected_stat: 0,
            attr_input: None,
            equip_focus: EquipFocus::Slots,
            selected_slot: 0,
            selected_item: 0,
            stats_scroll: 0,
            breakdown_scroll: 0,
        }
    }

    // === Tabs ===

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
        self.attr_input = None;
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
        self.attr_input = None;
    }

    pub fn set_tab(&mut self, idx: usize) {
        if let Some(tab) = Tab::all().get(idx) {
            self.current_tab = *tab;
            self.attr_input = None;
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.current_tab = Tab::Help;
        }
    }

    // === Navigation ===

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Build => {
                let cursor = &mut self.picker_cursor[self.build_focus.index()];
                *cursor = cursor.saturating_sub(1);
            }
            Tab::Attributes => {
                self.commit_attr_input();
                self.selected_stat = self.selected_stat.saturating_sub(1);
            }
            Tab::Equipment => match self.equip_focus {
                EquipFocus::Slots => {
                    self.selected_slot = self.selected_slot.saturating_sub(1);
                    self.selected_item = 0;
                }
                EquipFocus::Items => self.selected_item = self.selected_item.saturating_sub(1),
            },
            Tab::Stats => self.stats_scroll = self.stats_scroll.saturating_sub(1),
            Tab::Breakdown => self.breakdown_scroll = self.breakdown_scroll.saturating_sub(1),
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Build => {
                let len = self.picker_options(self.build_focus).len();
                let cursor = &mut self.picker_cursor[self.build_focus.index()];
                if *cursor + 1 < len {
                    *cursor += 1;
                }
            }
            Tab::Attributes => {
                self.commit_attr_input();
                if self.selected_stat + 1 < PrimaryStat::all().len() {
                    self.selected_stat += 1;
                }
            }
            Tab::Equipment => match self.equip_focus {
                EquipFocus::Slots => {
                    if self.selected_slot + 1 < GearSlot::all().len() {
                        self.selected_slot += 1;
                        self.selected_item = 0;
                    }
                }
                EquipFocus::Items => {
                    if self.selected_item + 1 < self.slot_items().len() {
                        self.selected_item += 1;
                    }
                }
            },
            Tab::Stats => self.stats_scroll += 1,
            Tab::Breakdown => self.breakdown_scroll += 1,
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        match self.current_tab {
            Tab::Build => {
                let idx = self.build_focus.index();
                self.build_focus = BuildFocus::all()[idx.saturating_sub(1)];
                self.clamp_picker_cursor();
            }
            Tab::Attributes => self.adjust_attribute(-1),
            Tab::Equipment => self.equip_focus = EquipFocus::Slots,
            _ => {}
        }
    }

    pub fn on_right(&mut self) {
        match self.current_tab {
            Tab::Build => {
                let focuses = BuildFocus::all();
                let idx = (self.build_focus.index() + 1).min(focuses.len() - 1);
                self.build_focus = focuses[idx];
                self.clamp_picker_cursor();
            }
            Tab::Attributes => self.adjust_attribute(1),
            Tab::Equipment => {
                self.equip_focus = EquipFocus::Items;
                self.selected_item = self.selected_item.min(self.slot_items().len().saturating_sub(1));
            }
            _ => {}
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Build => self.select_picker_entry(),
            Tab::Attributes => self.commit_attr_input(),
            Tab::Equipment => self.equip_selected(),
            _ => {}
        }
    }

    /// Digits type into the attribute entry on the Attributes tab and jump tabs elsewhere
    pub fn on_digit(&mut self, digit: char) {
        if self.current_tab == Tab::Attributes {
            let input = self.attr_input.get_or_insert_with(String::new);
            if input.len() < 6 {
                input.push(digit);
            }
        } else if let Some(n) = digit.to_digit(10) {
            if n >= 1 {
                self.set_tab(n as usize - 1);
            }
        }
    }

    pub fn on_backspace(&mut self) {
        if let Some(input) = self.attr_input.as_mut() {
            input.pop();
        }
    }

    pub fn on_escape(&mut self) {
        self.attr_input = None;
    }

    // === Build tab ===

    /// Names listed in a picker column; Super classes are filtered by the Base class
    pub fn picker_options(&self, focus: BuildFocus) -> Vec<&str> {
        let dataset = self.build.dataset();
        match focus {
            BuildFocus::Race => dataset.races.iter().map(|r| r.name.as_str()).collect(),
            BuildFocus::Class(ClassTier::Super) => dataset
                .super_classes_for(self.build.selection().class(ClassTier::Base))
                .map(|c| c.name.as_str())
                .collect(),
            BuildFocus::Class(tier) => dataset
                .classes_of_tier(tier)
                .map(|c| c.name.as_str())
                .collect(),
        }
    }

    pub fn picker_selected(&self, focus: BuildFocus) -> Option<&str> {
        match focus {
            BuildFocus::Race => self.build.selection().race.as_deref(),
            BuildFocus::Class(tier) => self.build.selection().class(tier),
        }
    }

    fn select_picker_entry(&mut self) {
        let focus = self.build_focus;
        let cursor = self.picker_cursor[focus.index()];
        let Some(name) = self.picker_options(focus).get(cursor).map(|s| s.to_string()) else {
            return;
        };
        match focus {
            BuildFocus::Race => self.build.set_race(Some(name.as_str())),
            BuildFocus::Class(tier) => self.build.set_class(tier, Some(name.as_str())),
        }
        self.status = Some(format!("{}: {}", focus.title(), name));
    }

    fn clamp_picker_cursor(&mut self) {
        let len = self.picker_options(self.build_focus).len();
        let cursor = &mut self.picker_cursor[self.build_focus.index()];
        *cursor = (*cursor).min(len.saturating_sub(1));
    }

    /// Clear the focused race/class, or the focused equipment slot
    pub fn clear_current(&mut self) {
        match self.current_tab {
            Tab::Build => match self.build_focus {
                BuildFocus::Race => self.build.set_race(None),
                BuildFocus::Class(tier) => self.build.set_class(tier, None),
            },
            Tab::Attributes => {
                self.attr_input = None;
                self.build.set_attribute(self.current_stat(), 0);
            }
            Tab::Equipment => self.unequip_current_slot(),
            _ => {}
        }
    }

    // === Attributes tab ===

    pub fn current_stat(&self) -> PrimaryStat {
        let stats = PrimaryStat::all();
        stats[self.selected_stat.min(stats.len() - 1)]
    }

    pub fn adjust_attribute(&mut self, delta: i64) {
        self.attr_input = None;
        let stat = self.current_stat();
        let current = i64::from(self.build.selection().allocation.get(stat));
        self.build.set_attribute(stat, current + delta);
    }

    fn commit_attr_input(&mut self) {
        let Some(input) = self.attr_input.take() else {
            return;
        };
        let stat = self.current_stat();
        let requested: i64 = input.parse().unwrap_or(0);
        let stored = self.build.set_attribute(stat, requested);
        if i64::from(stored) != requested {
            self.status = Some(format!("{} clamped to {}", stat.abbrev(), stored));
        }
    }

    // === Equipment tab ===

    pub fn current_slot(&self) -> GearSlot {
        let slots = GearSlot::all();
        slots[self.selected_slot.min(slots.len() - 1)]
    }

    /// Items tagged for the selected slot's kind
    pub fn slot_items(&self) -> Vec<&str> {
        self.build
            .dataset()
            .equipment_for(self.current_slot().kind())
            .map(|e| e.name.as_str())
            .collect()
    }

    pub fn equip_selected(&mut self) {
        match self.equip_focus {
            EquipFocus::Slots => self.equip_focus = EquipFocus::Items,
            EquipFocus::Items => {
                let slot = self.current_slot();
                let Some(name) = self.slot_items().get(self.selected_item).map(|s| s.to_string())
                else {
                    return;
                };
                self.build.set_equipment(slot, Some(name.as_str()));
                self.status = Some(format!("{}: {}", slot.label(), name));
            }
        }
    }

    pub fn unequip_current_slot(&mut self) {
        let slot = self.current_slot();
        self.build.set_equipment(slot, None);
    }

    // === Session ===

    pub fn reset(&mut self) {
        self.build.reset();
        self.attr_input = None;
        self.picker_cursor = [0; 4];
        self.status = Some("Build reset".to_string());
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(err) = self.theme_store.set(THEME_KEY, self.theme.key()) {
            warn!(%err, "failed to save theme preference");
        }
        self.status = Some(format!("Theme: {}", self.theme.name()));
    }

    /// Write the build summary to the log
    pub fn export_summary(&mut self) {
        match self.build.summary().to_json_pretty() {
            Ok(json) => {
                info!(summary = %json, "build exported");
                self.status = Some("Build summary written to log".to_string());
            }
            Err(err) => {
                warn!(%err, "failed to serialize build summary");
                self.status = Some("Export failed".to_string());
            }
        }
    }
}
