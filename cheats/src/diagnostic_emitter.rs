use crate::commands::SourceError;
use crate::{Args, ErrorStyle};
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream, WriteColor};
use codespan_reporting::term::{Config, DisplayStyle};

pub type CheatsResult<T> = anyhow::Result<T>;

pub struct DiagnosticEmitter {
    writer: Box<dyn WriteColor>,
    config: Config,
}

impl DiagnosticEmitter {
    pub fn stderr(args: &Args) -> Self {
        let color_choice = if args.no_color {
            ColorChoice::Never
        } else {
            ColorChoice::Auto
        };

        Self {
            writer: Box::new(StandardStream::stderr(color_choice)),
            config: config_for(args.error_style),
        }
    }

    pub fn emit(&mut self, error: &anyhow::Error) {
        match error.downcast_ref::<SourceError>() {
            Some(e) => {
                let file = SimpleFile::new(e.path.as_str(), e.text.as_str());
                self.emit_diagnostic(&file, &e.error.to_diagnostic(&e.text));
            }
            None => {
                let diag = Diagnostic::error().with_message(error.to_string());
                self.emit_diagnostic(&SimpleFile::new("", ""), &diag);
            }
        }
    }

    fn emit_diagnostic(&mut self, file: &SimpleFile<&str, &str>, diag: &Diagnostic<()>) {
        let result = codespan_reporting::term::emit(self.writer.as_mut(), &self.config, file, diag);
        if let Err(e) = result {
            log::error!("{}", diag.message);
            log::debug!("Could not render diagnostic: {}", e);
        }
    }
}

fn config_for(style: ErrorStyle) -> Config {
    let display_style = match style {
        ErrorStyle::Short => DisplayStyle::Short,
        ErrorStyle::Medium => DisplayStyle::Medium,
        ErrorStyle::Rich => DisplayStyle::Rich,
    };

    Config {
        display_style,
        ..Default::default()
    }
}
