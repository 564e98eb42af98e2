use std::collections::HashSet;
use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::Result;

/// Server used when `ZH_LOREM_URL` is unset.
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Sends a GET request to `/v1/generate` with query parameters.
    fn get_generated(&self, params: &[(String, String)]) -> Result<String> {
        self.client
            .get(self.url("/v1/generate"))
            .query(params)
            .send()?
            .error_for_status()?
            .text()
    }

    /// Sends a GET request to `/v1/corpora`.
    fn get_corpora(&self) -> Result<String> {
        self.client
            .get(self.url("/v1/corpora"))
            .send()?
            .error_for_status()?
            .text()
    }

    /// Sends a GET request to `/v1/loaded_corpora`.
    fn get_loaded_corpora(&self) -> Result<String> {
        self.client
            .get(self.url("/v1/loaded_corpora"))
            .send()?
            .error_for_status()?
            .text()
    }

    /// Sends a PUT request to `/v1/load_corpora`.
    fn put_load_corpora(&self, names: &str) -> Result<String> {
        self.client
            .put(self.url("/v1/load_corpora"))
            .query(&[("names", names)])
            .send()?
            .error_for_status()?
            .text()
    }

    /// Sends a PUT request to `/v1/reset`.
    fn put_reset(&self) -> Result<String> {
        self.client
            .put(self.url("/v1/reset"))
            .send()?
            .error_for_status()?
            .text()
    }
}

/// Splits a newline-separated server listing, dropping blank entries.
fn parse_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Global UI state (MUST persist between frames in egui).
struct PreviewUI {
    rest: RESTContext,
    paragraph: Option<String>,
    status: Option<String>,
    available_corpora: Vec<String>,
    selected_corpora: HashSet<String>,

    sentence: i64,
    avg_words_per_sentence: i64,
}

impl PreviewUI {
    /// Initializes the UI with the library defaults (3 sentences, 8 words).
    fn new(base_url: String) -> Result<Self> {
        let mut preview = Self {
            rest: RESTContext::new(base_url)?,
            paragraph: None,
            status: None,
            available_corpora: Vec::new(),
            selected_corpora: HashSet::new(),

            sentence: 3,
            avg_words_per_sentence: 8,
        };
        preview.get_corpora();
        preview.get_loaded_corpora();
        Ok(preview)
    }

    /// Builds the query parameters for `/v1/generate`.
    fn build_query(&self) -> Vec<(String, String)> {
        vec![
            ("sentence".into(), self.sentence.to_string()),
            ("avgWordsPerSentence".into(), self.avg_words_per_sentence.to_string()),
        ]
    }

    /// Performs the generation request.
    fn get_generated(&mut self) {
        let params = self.build_query();
        match self.rest.get_generated(&params) {
            Ok(paragraph) => {
                debug!("received {} characters", paragraph.chars().count());
                self.paragraph = Some(paragraph);
                self.status = None;
            }
            Err(e) => self.report(e),
        }
    }

    /// Performs the list corpora request.
    fn get_corpora(&mut self) {
        match self.rest.get_corpora() {
            Ok(body) => self.available_corpora = parse_lines(&body),
            Err(e) => self.report(e),
        }
    }

    /// Performs the loaded corpora request.
    fn get_loaded_corpora(&mut self) {
        match self.rest.get_loaded_corpora() {
            Ok(body) => self.selected_corpora = parse_lines(&body).into_iter().collect(),
            Err(e) => self.report(e),
        }
    }

    /// Activates the selected corpora, or the built-in one if none is selected.
    fn apply_selection(&mut self) {
        let names: Vec<&str> = self
            .available_corpora
            .iter()
            .filter(|name| self.selected_corpora.contains(*name))
            .map(String::as_str)
            .collect();

        let result = if names.is_empty() {
            self.rest.put_reset()
        } else {
            self.rest.put_load_corpora(&names.join(","))
        };
        match result {
            Ok(message) => self.status = Some(message),
            Err(e) => self.report(e),
        }
        self.get_loaded_corpora();
    }

    fn report(&mut self, e: reqwest::Error) {
        warn!("request failed: {e}");
        self.status = Some(format!("Error: {e}"));
    }
}

impl eframe::App for PreviewUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("preview_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Sentences");
                    ui.add(egui::Slider::new(&mut self.sentence, 0..=20));
                    ui.end_row();

                    ui.label("Average words per sentence");
                    ui.add(egui::Slider::new(&mut self.avg_words_per_sentence, 1..=40));
                    ui.end_row();

                    if ui
                        .add_sized([200.0, 40.0], egui::Button::new("Generate"))
                        .clicked()
                    {
                        self.get_generated();
                    }
                    if let Some(status) = &self.status {
                        ui.label(status);
                    }
                    ui.end_row();
                });

            ui.separator();

            let mut selection_changed = false;
            ui.horizontal_wrapped(|ui| {
                ui.label("Corpora:");
                for corpus in &self.available_corpora {
                    let mut checked = self.selected_corpora.contains(corpus);
                    if ui.checkbox(&mut checked, corpus).changed() {
                        selection_changed = true;
                        if checked {
                            self.selected_corpora.insert(corpus.clone());
                        } else {
                            self.selected_corpora.remove(corpus);
                        }
                    }
                }
                if ui.button("Refresh").clicked() {
                    self.get_corpora();
                    self.get_loaded_corpora();
                }
            });
            if selection_changed {
                self.apply_selection();
            }

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match &self.paragraph {
                Some(paragraph) if paragraph.is_empty() => {
                    ui.label("(empty paragraph)");
                }
                Some(paragraph) => {
                    ui.add(egui::Label::new(egui::RichText::new(paragraph).size(18.0)).wrap());
                }
                None => {
                    ui.label("Click Generate to start");
                }
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let base_url = std::env::var("ZH_LOREM_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_owned());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 420.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "zh-lorem preview",
        options,
        Box::new(|_| Ok(Box::new(PreviewUI::new(base_url)?))),
    )
}
