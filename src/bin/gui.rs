#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Parser;
use eframe::{egui, App, Frame};
use gradegrid::{
    catalog::{self, Tool, ToolCategory},
    config::{self, Config},
    conversion::{self, ConversionRequest, ConversionResult},
    export::{self, ExportFormat, ExportRecord},
    gpa::{self, GpaMode, GpaRequest},
    i18n,
    input::parse_number,
    logging,
    quantity::UnitFamily,
    ui_cli::{CONVERSION_DECIMALS, CONVERTED_LABEL, GPA_DECIMALS},
};
use image::GenericImageView;
use rfd::FileDialog;
use tracing::{info, warn};

/// GradeGrid 데스크톱 앱.
#[derive(Debug, Parser)]
#[command(name = "gradegrid", version, about = "GradeGrid desktop GUI")]
struct GuiArgs {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, short = 'L')]
    lang: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    logging::init("gradegrid=info");
    let args = GuiArgs::parse();

    let mut app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            warn!(%err, "config.toml could not be loaded, using defaults");
            Config::default()
        }
    };
    if let Some(lang_cli) = args.lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("GradeGrid")
        .with_inner_size([960.0, 680.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "GradeGrid",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["gradegrid.png", "icon.png", "assets/icon.png", "../gradegrid.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui 기본 글꼴 앞에 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, name.to_string());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 시스템 폰트를 찾아 적용한다. 찾지 못하면 egui 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![PathBuf::from("assets/fonts/korean.ttf")];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let dir = Path::new(&windir).join("Fonts");
        for name in ["malgun.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(dir.join(name));
        }
    }
    for p in [
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    ] {
        candidates.push(PathBuf::from(p));
    }

    let found = candidates
        .iter()
        .find(|p| p.exists())
        .ok_or_else(|| "No Korean font found; using egui default font.".to_string())?;
    let bytes = fs::read(found)
        .map_err(|e| format!("Failed to read font file ({}): {e}", found.display()))?;
    apply_font_bytes(ctx, bytes, "korean_font");
    info!(path = %found.display(), "font loaded");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Calculator,
    Conversions,
    Settings,
    About,
}

/// 결과 카드에서 누른 버튼.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardAction {
    Copy,
    Export,
}

struct GuiApp {
    config: Config,
    config_path: PathBuf,
    tr: i18n::Translator,
    page: Page,
    search_query: String,
    gpa_mode: GpaMode,
    sgpa_inputs: Vec<String>,
    gpa_input: String,
    gpa_result: Option<ConversionResult>,
    conv_family: UnitFamily,
    conv_input: String,
    conv_from: String,
    conv_to: String,
    conv_result: Option<ConversionResult>,
    lang_input: String,
    multiplier: f64,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: Config) -> Self {
        Self::with_config_path(config, PathBuf::from(config::CONFIG_FILE))
    }

    fn with_config_path(config: Config, config_path: PathBuf) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        info!(
            language = %lang_code,
            overrides_loaded = tr.lookup("gui.nav.home").is_some(),
            "gui language resolved"
        );
        let (conv_from, conv_to) = UnitFamily::Length.default_units();
        Self {
            lang_input: config.language.clone(),
            multiplier: config.gpa_scale().percent_multiplier,
            config,
            config_path,
            tr,
            page: Page::Home,
            search_query: String::new(),
            gpa_mode: GpaMode::SgpaToCgpa,
            sgpa_inputs: vec![String::new()],
            gpa_input: String::new(),
            gpa_result: None,
            conv_family: UnitFamily::Length,
            conv_input: String::new(),
            conv_from: conv_from.to_string(),
            conv_to: conv_to.to_string(),
            conv_result: None,
            status: None,
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 홈 카드에서 도구를 연다.
    fn open_tool(&mut self, tool: Tool) {
        match tool {
            Tool::Gpa(mode) => {
                self.set_gpa_mode(mode);
                self.page = Page::Calculator;
            }
            Tool::Convert(family) => {
                self.set_family(family);
                self.page = Page::Conversions;
            }
        }
    }

    /// 모드를 바꾸면 입력과 결과를 비운다.
    fn set_gpa_mode(&mut self, mode: GpaMode) {
        if self.gpa_mode == mode {
            return;
        }
        self.gpa_mode = mode;
        self.sgpa_inputs = vec![String::new()];
        self.gpa_input.clear();
        self.gpa_result = None;
    }

    fn add_semester(&mut self) {
        self.sgpa_inputs.push(String::new());
    }

    /// 학기 입력 칸은 최소 하나 남긴다.
    fn remove_semester(&mut self, index: usize) {
        if self.sgpa_inputs.len() > 1 && index < self.sgpa_inputs.len() {
            self.sgpa_inputs.remove(index);
        }
    }

    fn calculate_gpa(&mut self) {
        let values = if self.gpa_mode.takes_list() {
            self.sgpa_inputs.clone()
        } else {
            vec![self.gpa_input.clone()]
        };
        let request = GpaRequest::new(self.gpa_mode, &values);
        self.gpa_result = gpa::compute(&request, &self.config.gpa_scale());
    }

    /// 계열을 바꾸면 기본 단위 쌍으로 돌아간다.
    fn set_family(&mut self, family: UnitFamily) {
        if self.conv_family != family {
            self.conv_family = family;
            let (from, to) = family.default_units();
            self.conv_from = from.to_string();
            self.conv_to = to.to_string();
        }
        self.recompute_conversion();
    }

    fn swap_units(&mut self) {
        std::mem::swap(&mut self.conv_from, &mut self.conv_to);
        self.recompute_conversion();
    }

    fn recompute_conversion(&mut self) {
        self.conv_result = parse_number(&self.conv_input).and_then(|value| {
            conversion::convert(&ConversionRequest::new(
                self.conv_family,
                &self.conv_from,
                &self.conv_to,
                value,
            ))
        });
    }

    fn set_dark_mode(&mut self, enabled: bool) {
        self.config.dark_mode = enabled;
        let msg = if enabled {
            self.txt("gui.status.dark_on", "Dark mode enabled")
        } else {
            self.txt("gui.status.dark_off", "Light mode enabled")
        };
        self.persist_config(msg);
    }

    fn set_export_format(&mut self, format: ExportFormat) {
        self.config.export_format = format;
        let msg = self.txt("gui.status.saved", "Settings saved.");
        self.persist_config(msg);
    }

    /// 언어를 바꾸고 번역기를 즉시 다시 만든다.
    fn apply_language(&mut self) {
        self.config.language = self.lang_input.trim().to_string();
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr =
            i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        let msg = self.txt("gui.status.saved", "Settings saved.");
        self.persist_config(msg);
    }

    /// 0 이하나 유한하지 않은 배율은 거부한다.
    fn apply_multiplier(&mut self) {
        if !(self.multiplier.is_finite() && self.multiplier > 0.0) {
            self.status = Some(self.txt(
                "gui.status.invalid_multiplier",
                "Multiplier must be greater than 0.",
            ));
            self.multiplier = self.config.gpa_scale().percent_multiplier;
            return;
        }
        self.config.percent_multiplier = self.multiplier;
        if self.gpa_result.is_some() {
            self.calculate_gpa();
        }
        let msg = self.txt("gui.status.saved", "Settings saved.");
        self.persist_config(msg);
    }

    fn persist_config(&mut self, ok_message: String) {
        self.status = Some(match self.config.save_to(&self.config_path) {
            Ok(()) => ok_message,
            Err(e) => format!("{}: {e}", self.txt("gui.status.save_error", "Save error")),
        });
    }

    fn gpa_record(&self) -> Option<ExportRecord> {
        let result = self.gpa_result.as_ref()?;
        Some(ExportRecord::new(
            self.gpa_mode.result_label(),
            result.value,
            self.gpa_mode.unit(),
            &result.formula,
        ))
    }

    fn conversion_record(&self) -> Option<ExportRecord> {
        let result = self.conv_result.as_ref()?;
        Some(ExportRecord::new(
            CONVERTED_LABEL,
            result.value,
            self.conv_unit_symbol(),
            &result.formula,
        ))
    }

    fn conv_unit_symbol(&self) -> &'static str {
        self.conv_family
            .find_unit(&self.conv_to)
            .map(|u| u.symbol())
            .unwrap_or("")
    }

    fn export_result(&mut self, record: ExportRecord) {
        let format = self.config.export_format;
        let Some(path) = save_dialog(&export::default_file_name(format), format) else {
            return;
        };
        self.write_document(&path, &export::render(&record, format));
    }

    fn export_sample(&mut self) {
        let format = self.config.export_format;
        let Some(path) = save_dialog(&export::sample_file_name(format), format) else {
            return;
        };
        let doc = export::render_sample(format, Local::now().naive_local());
        self.write_document(&path, &doc);
    }

    fn write_document(&mut self, path: &Path, contents: &str) {
        self.status = Some(match export::write_export(path, contents) {
            Ok(()) => format!(
                "{} {}",
                self.txt("gui.status.exported", "Exported to"),
                path.display()
            ),
            Err(e) => format!("{}: {e}", self.txt("gui.status.export_error", "Export error")),
        });
    }

    /// 사이드 메뉴.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading("GradeGrid");
            ui.add_space(8.0);
        });
        for (page, label) in [
            (Page::Home, self.txt("gui.nav.home", "Home")),
            (Page::Calculator, self.txt("gui.nav.calculator", "Calculator")),
            (Page::Conversions, self.txt("gui.nav.conversions", "Conversions")),
            (Page::Settings, self.txt("gui.nav.settings", "Settings")),
            (Page::About, self.txt("gui.nav.about", "About")),
        ] {
            let selected = self.page == page;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.page = page;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_home(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.home.heading", "Academic & Unit Calculators"));
        ui.label(self.txt(
            "gui.home.tagline",
            "Fast and accurate GPA conversions and unit converters, with every formula shown.",
        ));
        ui.add_space(8.0);
        let hint = self.txt("gui.home.search_hint", "Search calculators...");
        ui.add(
            egui::TextEdit::singleline(&mut self.search_query)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let hits = catalog::search(catalog::CATALOG, &self.search_query);
        if hits.is_empty() {
            let template = self.txt("gui.home.no_match", "No calculators found for \"{q}\"");
            let query = self.search_query.trim().to_string();
            ui.label(i18n::fill_template(&template, &[("q", query)]));
            return;
        }

        let mut opened = None;
        for category in [ToolCategory::Academic, ToolCategory::Conversion] {
            let in_category: Vec<_> = hits.iter().filter(|t| t.category == category).collect();
            if in_category.is_empty() {
                continue;
            }
            let title = match category {
                ToolCategory::Academic => self.txt("gui.home.academic", category.title()),
                ToolCategory::Conversion => self.txt("gui.home.conversion", category.title()),
            };
            ui.add_space(6.0);
            ui.strong(title);
            for tool in in_category {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    if ui.button(tool.title).clicked() {
                        opened = Some(tool.tool);
                    }
                    ui.add(egui::Label::new(tool.description).wrap(true));
                });
            }
        }
        if let Some(tool) = opened {
            self.open_tool(tool);
        }
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        let mut mode = self.gpa_mode;
        egui::ComboBox::from_id_source("gpa_mode")
            .selected_text(mode.title())
            .show_ui(ui, |ui| {
                for m in GpaMode::ALL {
                    ui.selectable_value(&mut mode, m, m.title());
                }
            });
        self.set_gpa_mode(mode);

        ui.heading(self.gpa_mode.title());
        ui.label(self.gpa_mode.description());
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            if self.gpa_mode.takes_list() {
                let mut remove = None;
                egui::Grid::new("sgpa_grid")
                    .num_columns(3)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        let can_remove = self.sgpa_inputs.len() > 1;
                        for (i, value) in self.sgpa_inputs.iter_mut().enumerate() {
                            ui.label(format!("Semester {}", i + 1));
                            ui.add(egui::TextEdit::singleline(value).hint_text("e.g. 8.5"));
                            if ui.add_enabled(can_remove, egui::Button::new("✖")).clicked() {
                                remove = Some(i);
                            }
                            ui.end_row();
                        }
                    });
                if let Some(i) = remove {
                    self.remove_semester(i);
                }
                if ui.button(self.txt("gui.calc.add_semester", "+ Add Semester")).clicked() {
                    self.add_semester();
                }
            } else {
                ui.label(self.gpa_mode.input_label());
                let response = ui.text_edit_singleline(&mut self.gpa_input);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.calculate_gpa();
                }
            }
            ui.add_space(8.0);
            if ui.button(self.txt("gui.calc.calculate", "Calculate")).clicked() {
                self.calculate_gpa();
            }
        });

        if let Some(result) = self.gpa_result.clone() {
            let mode = self.gpa_mode;
            let action =
                self.result_card(ui, mode.result_label(), mode.unit(), &result, GPA_DECIMALS);
            match action {
                Some(CardAction::Copy) => {
                    self.status = Some(self.txt("gui.status.copied", "Copied to clipboard"));
                }
                Some(CardAction::Export) => {
                    if let Some(record) = self.gpa_record() {
                        self.export_result(record);
                    }
                }
                None => {}
            }
        }

        ui.add_space(8.0);
        ui.add(egui::Label::new(egui::RichText::new(self.gpa_mode.note()).small()).wrap(true));
    }

    fn ui_conversions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut family = self.conv_family;
            for f in UnitFamily::ALL {
                ui.selectable_value(&mut family, f, f.id());
            }
            if family != self.conv_family {
                self.set_family(family);
            }
        });
        ui.heading(self.conv_family.title());
        ui.label(self.conv_family.description());
        ui.add_space(8.0);

        let before = (self.conv_from.clone(), self.conv_to.clone());
        let mut input_changed = false;
        let mut swap = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(self.txt("gui.conv.value", "Value"));
                    input_changed = ui
                        .add(
                            egui::TextEdit::singleline(&mut self.conv_input)
                                .hint_text("Enter value"),
                        )
                        .changed();
                    ui.end_row();

                    ui.label(self.txt("gui.conv.from", "From"));
                    unit_combo(ui, "conv_from", self.conv_family, &mut self.conv_from);
                    ui.end_row();

                    ui.label(self.txt("gui.conv.to", "To"));
                    unit_combo(ui, "conv_to", self.conv_family, &mut self.conv_to);
                    ui.end_row();
                });
            ui.add_space(4.0);
            swap = ui.button(self.txt("gui.conv.swap", "⇅ Swap")).clicked();
        });
        if swap {
            self.swap_units();
        } else if input_changed || before != (self.conv_from.clone(), self.conv_to.clone()) {
            self.recompute_conversion();
        }

        if let Some(result) = self.conv_result.clone() {
            let unit = self.conv_unit_symbol();
            match self.result_card(ui, CONVERTED_LABEL, unit, &result, CONVERSION_DECIMALS) {
                Some(CardAction::Copy) => {
                    self.status = Some(self.txt("gui.status.copied", "Copied to clipboard"));
                }
                Some(CardAction::Export) => {
                    if let Some(record) = self.conversion_record() {
                        self.export_result(record);
                    }
                }
                None => {}
            }
        }

        ui.add_space(8.0);
        ui.strong(self.txt("gui.conv.quick_reference", "Quick Reference"));
        for line in self.conv_family.quick_reference() {
            ui.label(format!("• {line}"));
        }
    }

    /// 결과 값, 식, 복사/내보내기 버튼을 보여준다.
    fn result_card(
        &self,
        ui: &mut egui::Ui,
        label: &str,
        unit: &str,
        result: &ConversionResult,
        decimals: usize,
    ) -> Option<CardAction> {
        let mut action = None;
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(label);
            ui.heading(format!("{}{unit}", result.display(decimals)));
            ui.separator();
            ui.label(self.txt("gui.result.formula", "Formula"));
            ui.add(egui::Label::new(egui::RichText::new(&result.formula).monospace()).wrap(true));
            ui.horizontal(|ui| {
                if ui.button(self.txt("gui.result.copy", "Copy")).clicked() {
                    let text = format!(
                        "{label}: {}{unit}\n{}",
                        result.display(decimals),
                        result.formula
                    );
                    ui.output_mut(|o| o.copied_text = text);
                    action = Some(CardAction::Copy);
                }
                if ui.button(self.txt("gui.result.export", "Export")).clicked() {
                    action = Some(CardAction::Export);
                }
            });
        });
        action
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.settings.heading", "Settings"));
        ui.label(self.txt("gui.settings.tagline", "Customize your GradeGrid experience"));
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(self.txt("gui.settings.appearance", "Appearance"));
            let mut dark = self.config.dark_mode;
            if ui
                .checkbox(&mut dark, self.txt("gui.settings.dark_mode", "Dark Mode"))
                .on_hover_text(self.txt(
                    "gui.settings.dark_mode_tip",
                    "Switch between light and dark theme",
                ))
                .changed()
            {
                self.set_dark_mode(dark);
            }
        });

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(self.txt("gui.settings.language", "Language"));
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.clone())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                    });
                if ui.button(self.txt("gui.settings.apply", "Apply")).clicked() {
                    self.apply_language();
                }
            });
        });

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(self.txt("gui.settings.export", "Export Settings"));
            ui.label(self.txt("gui.settings.export_format", "Default Export Format"));
            let mut format = self.config.export_format;
            ui.horizontal(|ui| {
                ui.selectable_value(&mut format, ExportFormat::Txt, "Text File (.txt)");
                ui.selectable_value(&mut format, ExportFormat::Csv, "CSV File (.csv)");
            });
            if format != self.config.export_format {
                self.set_export_format(format);
            }
            if ui.button(self.txt("gui.settings.export_sample", "Export Sample File")).clicked() {
                self.export_sample();
            }
        });

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(self.txt("gui.settings.multiplier", "CGPA → Percentage multiplier"));
            ui.horizontal(|ui| {
                ui.add(
                    egui::DragValue::new(&mut self.multiplier)
                        .speed(0.05)
                        .clamp_range(0.1..=100.0),
                );
                if ui.button(self.txt("gui.settings.apply", "Apply")).clicked() {
                    self.apply_multiplier();
                }
            });
        });

        ui.add_space(8.0);
        ui.small("GradeGrid v1.0");
    }

    fn ui_about(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.about.heading", "About GradeGrid"));
        ui.label(self.txt("gui.about.tagline", "Your essential academic toolkit"));
        ui.add_space(8.0);
        ui.strong(self.txt("gui.about.mission_title", "Our Mission"));
        ui.add(egui::Label::new(self.txt(
            "gui.about.mission",
            "GradeGrid was created to provide students with a simple, fast, and accurate platform for essential academic and daily-use calculations.",
        )).wrap(true));
        ui.add_space(8.0);
        for (title_key, title, body_key, body) in ABOUT_FEATURES {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.strong(self.txt(title_key, title));
                ui.add(egui::Label::new(self.txt(body_key, body)).wrap(true));
            });
        }
        ui.add_space(8.0);
        ui.strong(self.txt("gui.about.disclaimer_title", "Important Disclaimer"));
        ui.add(egui::Label::new(self.txt(
            "gui.about.disclaimer",
            "The GPA conversion formulas follow the common 9.5 multiplier standard. Different institutions may use different conversion factors; always verify with your university's official guidelines.",
        )).wrap(true));
    }
}

const ABOUT_FEATURES: [(&str, &str, &str, &str); 4] = [
    (
        "gui.about.academic_title",
        "Academic Tools",
        "gui.about.academic",
        "Specialized GPA calculators designed for students to convert between SGPA, CGPA, and percentage formats.",
    ),
    (
        "gui.about.converters_title",
        "Unit Converters",
        "gui.about.converters",
        "Comprehensive conversion tools for length, weight, time, and temperature with instant results.",
    ),
    (
        "gui.about.instant_title",
        "Instant Results",
        "gui.about.instant",
        "Real-time calculations as you type, with no waiting time.",
    ),
    (
        "gui.about.formula_title",
        "Formula Transparency",
        "gui.about.formula",
        "Every calculation shows the formula used, so you understand exactly how your result was computed.",
    ),
];

fn unit_combo(ui: &mut egui::Ui, id: &str, family: UnitFamily, value: &mut String) {
    let current = family
        .find_unit(value)
        .map(|u| u.label.to_string())
        .unwrap_or_else(|| value.clone());
    egui::ComboBox::from_id_source(id)
        .selected_text(current)
        .width(180.0)
        .show_ui(ui, |ui| {
            for unit in family.units() {
                ui.selectable_value(value, unit.id.to_string(), unit.label);
            }
        });
}

fn save_dialog(file_name: &str, format: ExportFormat) -> Option<PathBuf> {
    let ext = format.extension();
    FileDialog::new()
        .set_file_name(file_name)
        .add_filter(ext.to_uppercase(), &[ext])
        .save_file()
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.set_visuals(if self.config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.as_deref().unwrap_or(""));
            });
        });

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.page {
                    Page::Home => self.ui_home(ui),
                    Page::Calculator => self.ui_calculator(ui),
                    Page::Conversions => self.ui_conversions(ui),
                    Page::Settings => self.ui_settings(ui),
                    Page::About => self.ui_about(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_in(dir: &tempfile::TempDir) -> GuiApp {
        GuiApp::with_config_path(Config::default(), dir.path().join("config.toml"))
    }

    #[test]
    fn opening_a_converter_card_selects_its_default_units() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.open_tool(Tool::Convert(UnitFamily::Temperature));
        assert_eq!(app.page, Page::Conversions);
        assert_eq!(app.conv_from, "celsius");
        assert_eq!(app.conv_to, "fahrenheit");
    }

    #[test]
    fn opening_a_gpa_card_switches_mode_and_clears_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.sgpa_inputs = vec!["8".into(), "9".into()];
        app.open_tool(Tool::Gpa(GpaMode::PercentToCgpa));
        assert_eq!(app.page, Page::Calculator);
        assert_eq!(app.gpa_mode, GpaMode::PercentToCgpa);
        assert_eq!(app.sgpa_inputs, vec![String::new()]);
    }

    #[test]
    fn last_semester_row_cannot_be_removed() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.remove_semester(0);
        assert_eq!(app.sgpa_inputs.len(), 1);
        app.add_semester();
        app.remove_semester(0);
        assert_eq!(app.sgpa_inputs.len(), 1);
    }

    #[test]
    fn semester_average_is_calculated() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.sgpa_inputs = vec!["8".into(), "9".into(), "7".into()];
        app.calculate_gpa();
        let result = app.gpa_result.as_ref().unwrap();
        assert_eq!(result.display(GPA_DECIMALS), "8.00");
        assert_eq!(app.gpa_record().unwrap().label, "Your CGPA");
    }

    #[test]
    fn conversion_follows_input_and_swap() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.conv_input = "1".into();
        app.recompute_conversion();
        assert!((app.conv_result.as_ref().unwrap().value - 3.28084).abs() < 1e-4);

        app.swap_units();
        assert_eq!(app.conv_from, "foot");
        assert!((app.conv_result.as_ref().unwrap().value - 0.3048).abs() < 1e-9);
        assert_eq!(app.conversion_record().unwrap().unit, "m");

        app.conv_input = "abc".into();
        app.recompute_conversion();
        assert!(app.conv_result.is_none());
    }

    #[test]
    fn dark_mode_is_saved_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.set_dark_mode(true);
        let saved = config::load_or_default_from(&dir.path().join("config.toml")).unwrap();
        assert!(saved.dark_mode);
    }

    #[test]
    fn non_positive_multiplier_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.multiplier = 0.0;
        app.apply_multiplier();
        assert_eq!(app.config.percent_multiplier, gpa::STANDARD_PERCENT_MULTIPLIER);
        assert_eq!(app.multiplier, gpa::STANDARD_PERCENT_MULTIPLIER);
    }

    #[test]
    fn new_multiplier_recalculates_shown_result() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.set_gpa_mode(GpaMode::CgpaToPercent);
        app.gpa_input = "8".into();
        app.calculate_gpa();
        app.multiplier = 10.0;
        app.apply_multiplier();
        assert!((app.gpa_result.as_ref().unwrap().value - 80.0).abs() < 1e-9);
    }

    #[test]
    fn export_writes_the_rendered_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.sgpa_inputs = vec!["8.5".into()];
        app.calculate_gpa();
        let record = app.gpa_record().unwrap();
        let path = dir.path().join("out.txt");
        app.write_document(&path, &export::render(&record, ExportFormat::Txt));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("GradeGrid Result\n\nYour CGPA: 8.5"));
    }
}
