use iced::widget::{rule, Button, Column, Container, PickList, Row, Scrollable, Space, Text, TextInput};
use iced::{Border, Color, Element, Font, Length, Task};

use filemeta::{utils, DigestAlgorithm, ExportFormat, RecordCollection, Session};
use rfd::FileDialog;
use std::path::PathBuf;
use tokio::task;

#[derive(Debug, Clone)]
pub enum Message {
    Browse,
    FilesChosen(Option<Vec<PathBuf>>),
    PathsChanged(String),
    KnownHashChanged(String),
    LoadHashFile,
    HashFileLoaded(Option<String>),
    Extract,
    ExtractComplete(Result<(RecordCollection, Vec<String>), String>),
    FormatSelected(ExportFormat),
    Export,
}

pub struct FileMetaApp {
    // UI state
    path_input: String,
    known_hash: String,
    export_format: ExportFormat,
    status_message: String,
    notices: Vec<String>,
    is_extracting: bool,
    report: String,

    session: Session,
}

impl FileMetaApp {
    pub fn new() -> (Self, Task<Message>) {
        (
            FileMetaApp {
                path_input: String::new(),
                known_hash: String::new(),
                export_format: ExportFormat::Csv,
                status_message: String::new(),
                notices: Vec::new(),
                is_extracting: false,
                report: String::new(),
                session: Session::new(DigestAlgorithm::Sha256),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Browse => {
                return Task::perform(async {
                    FileDialog::new().set_title("Select Files").set_directory(".").pick_files()
                }, Message::FilesChosen);
            }
            Message::FilesChosen(Some(paths)) => {
                let joined: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                self.path_input = joined.join(";");
            }
            Message::FilesChosen(None) => { /* cancelled */ }
            Message::PathsChanged(s) => {
                self.path_input = s;
            }
            Message::KnownHashChanged(s) => {
                self.known_hash = s;
            }
            Message::LoadHashFile => {
                return Task::perform(async {
                    FileDialog::new().set_directory(".").add_filter("text", &["txt", "sha256", "hash"]).pick_file()
                }, |res| {
                    let txt = res.and_then(|p| std::fs::read_to_string(p).ok());
                    Message::HashFileLoaded(txt)
                });
            }
            Message::HashFileLoaded(opt) => {
                match opt.as_deref().and_then(utils::parse_first_hash_from_text) {
                    Some(h) => self.known_hash = h,
                    None if opt.is_some() => self.status_message = "No hash found in file.".to_string(),
                    None => {}
                }
            }
            Message::Extract => {
                let paths = utils::split_path_list(&self.path_input);
                if paths.is_empty() {
                    self.status_message = "Error: No file selected.".to_string();
                    return Task::none();
                }
                tracing::info!(count = paths.len(), "starting extraction");
                self.status_message = "Extracting metadata...".to_string();
                self.is_extracting = true;
                let known_hash = self.known_hash.clone();
                let algo = self.session.algorithm();
                return Task::perform(async move {
                    task::spawn_blocking(move || {
                        let reference = (!known_hash.is_empty()).then_some(known_hash.as_str());
                        let out = filemeta::extract_metadata(&paths, reference, algo);
                        let notices: Vec<String> = out.notices.iter().map(|n| n.to_string()).collect();
                        (out.records, notices)
                    })
                    .await
                    .map_err(|e| format!("extraction task failed: {e}"))
                }, Message::ExtractComplete);
            }
            Message::ExtractComplete(result) => {
                self.is_extracting = false;
                match result {
                    Ok((records, notices)) => {
                        for n in &notices {
                            tracing::warn!("{n}");
                        }
                        self.session.replace(records);
                        self.report = self.session.render();
                        self.status_message = format!(
                            "Extracted {} file(s), {} skipped.",
                            self.session.records().len(),
                            notices.len()
                        );
                        self.notices = notices;
                    }
                    Err(e) => {
                        tracing::error!("{e}");
                        self.status_message = format!("Error: {e}");
                    }
                }
            }
            Message::FormatSelected(f) => {
                self.export_format = f;
            }
            Message::Export => {
                self.status_message = match self.session.export(self.export_format, &PathBuf::from(".")) {
                    Ok(path) => format!("Metadata exported to {}", path.display()),
                    Err(e) => {
                        tracing::error!("export failed: {e}");
                        format!("Error: {e}")
                    }
                };
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let accent = self.accent_color();
        let text_color = self.text_color();
        let secondary_text = self.secondary_text_color();

        let title = Text::new("File Metadata Extractor")
            .size(28)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(accent),
                }
            });

        let path_label = Text::new("Select files (separate multiple files with semicolon ';'):")
            .size(14)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(text_color),
                }
            });

        let path_input = TextInput::new("path/to/file.txt;path/to/other.bin", &self.path_input)
            .on_input(Message::PathsChanged)
            .padding(10)
            .width(Length::Fill);

        let browse_btn = Button::new(Text::new("Browse").size(14))
            .on_press(Message::Browse)
            .padding(10);

        let hash_label = Text::new("Enter known file hash for integrity check (optional):")
            .size(14)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(text_color),
                }
            });

        let hash_input = TextInput::new("SHA-256 hex digest", &self.known_hash)
            .on_input(Message::KnownHashChanged)
            .padding(10)
            .width(Length::Fill);

        let load_hash_btn = Button::new(Text::new("Load Hash File").size(14))
            .on_press(Message::LoadHashFile)
            .padding(10);

        let extract_btn = Button::new(Text::new("Extract Metadata").size(16))
            .on_press_maybe((!self.is_extracting).then_some(Message::Extract))
            .padding(12);

        let format_picker = PickList::new(
            ExportFormat::all(),
            Some(self.export_format),
            Message::FormatSelected,
        )
        .padding(10);

        let can_export = !self.is_extracting && !self.session.records().is_empty();
        let export_btn = Button::new(Text::new("Export Metadata").size(16))
            .on_press_maybe(can_export.then_some(Message::Export))
            .padding(12);

        let status = Text::new(&self.status_message)
            .size(14)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(secondary_text),
                }
            });

        let mut notices = Column::new().spacing(4);
        for n in &self.notices {
            notices = notices.push(
                Text::new(n)
                    .size(12)
                    .style(|_theme| {
                        iced::widget::text::Style {
                            color: Some(Color::from_rgb(0.9, 0.2, 0.2)),
                        }
                    }),
            );
        }

        let output = Scrollable::new(
            Container::new(Text::new(&self.report).font(Font::MONOSPACE).size(13))
                .padding(12)
                .width(Length::Fill),
        )
        .height(Length::Fill);

        let output_bg = self.container_bg_color();
        let border_color = self.border_color();
        let output_panel = Container::new(output)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(output_bg)),
                    border: Border {
                        color: border_color,
                        width: 1.0,
                        radius: iced::border::Radius::from(6.0),
                    },
                    ..Default::default()
                }
            });

        let content = Column::new()
            .padding(24)
            .spacing(12)
            .push(title)
            .push(rule::Rule::horizontal(1))
            .push(path_label)
            .push(Row::new().spacing(10).push(path_input).push(browse_btn))
            .push(hash_label)
            .push(Row::new().spacing(10).push(hash_input).push(load_hash_btn))
            .push(Space::with_height(8))
            .push(
                Row::new()
                    .spacing(10)
                    .push(extract_btn)
                    .push(Space::with_width(Length::Fill))
                    .push(Text::new("Export format:").size(14))
                    .push(format_picker)
                    .push(export_btn),
            )
            .push(status)
            .push(notices)
            .push(output_panel);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn text_color(&self) -> Color {
        Color::from_rgb(0.1, 0.1, 0.1)
    }

    fn secondary_text_color(&self) -> Color {
        Color::from_rgb(0.4, 0.4, 0.4)
    }

    fn container_bg_color(&self) -> Color {
        Color::from_rgb(0.95, 0.95, 0.95)
    }

    fn border_color(&self) -> Color {
        Color::from_rgb(0.8, 0.8, 0.8)
    }

    fn accent_color(&self) -> Color {
        Color::from_rgb(0.2, 0.5, 0.8)
    }
}
