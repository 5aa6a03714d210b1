#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![expect(rustdoc::missing_crate_level_docs)] // it's an example

use std::{cell::RefCell, rc::Rc};

use eframe::egui;
use ogcalendar::{Calendar, CalendarEvent, EventKind, MonthNames, WeekdayCaptions, YearMonth};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ogcalendar demo",
        options,
        Box::new(|_cc| Ok(Box::<DemoApp>::default())),
    )
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Language {
    English,
    German,
}

struct DemoApp {
    calendar: Calendar,
    language: Language,

    /// Filled by the calendar's subscription.
    log: Rc<RefCell<Vec<String>>>,
}

impl Default for DemoApp {
    fn default() -> Self {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut calendar = Calendar::default();
        for kind in EventKind::ALL {
            let log = Rc::clone(&log);
            calendar.subscribe(kind, move |event| {
                log.borrow_mut().push(describe(event));
            });
        }
        Self {
            calendar,
            language: Language::English,
            log,
        }
    }
}

fn describe(event: &CalendarEvent) -> String {
    let kind = event.kind();
    match event {
        CalendarEvent::DateSelected { old, new } => match old {
            Some(old) => format!("{kind}: {old} -> {new}"),
            None => format!("{kind}: {new}"),
        },
        CalendarEvent::MonthSelected { old, new } => {
            format!("{kind}: {} -> {}", old.name(), new.name())
        }
        CalendarEvent::YearSelected { old, new } => format!("{kind}: {old} -> {new}"),
    }
}

impl DemoApp {
    fn set_language(&mut self, language: Language) {
        self.language = language;
        let (captions, names) = match language {
            Language::English => (WeekdayCaptions::english(), MonthNames::english()),
            Language::German => (WeekdayCaptions::german(), MonthNames::german()),
        };
        self.calendar.set_weekday_captions(captions);
        self.calendar.set_month_names(names);
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut language = self.language;
                ui.selectable_value(&mut language, Language::English, "English");
                ui.selectable_value(&mut language, Language::German, "Deutsch");
                if language != self.language {
                    self.set_language(language);
                }

                if ui.button("Today").clicked() {
                    self.calendar
                        .set_current_date(YearMonth::from_date(chrono::Local::now().date_naive()));
                }
            });
            ui.separator();

            let events = self.calendar.show(ui).inner;
            for event in &events {
                log::info!("{}", describe(event));
            }

            ui.separator();
            match self.calendar.selected_date() {
                Some(date) => ui.label(format!("Selected: {}", date.format("%Y-%m-%d"))),
                None => ui.label("Nothing selected yet"),
            };

            ui.separator();
            ui.heading("Events");
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in self.log.borrow().iter() {
                        ui.monospace(line.as_str());
                    }
                });
        });
    }
}
