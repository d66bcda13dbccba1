use allot_match::Match;
use serde_json::json;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
    json: bool,
}

impl Output {
    pub fn new(color: bool, json: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
            json,
        }
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        self.stdout.set_color(ColorSpec::new().set_fg(Some(color)))
    }

    fn set_dim(&mut self) -> io::Result<()> {
        self.stdout.set_color(ColorSpec::new().set_dimmed(true))
    }

    fn reset(&mut self) -> io::Result<()> {
        self.stdout.reset()
    }

    pub fn print_result(&mut self, request: &str, found: Option<&Match<'_>>) -> io::Result<()> {
        if self.json {
            writeln!(self.stdout, "{}", result_json(request, found))
        } else {
            self.print_text(request, found)
        }
    }

    fn print_text(&mut self, request: &str, found: Option<&Match<'_>>) -> io::Result<()> {
        let Some(found) = found else {
            self.set_color(Color::Red)?;
            write!(self.stdout, "✗")?;
            self.reset()?;
            return writeln!(self.stdout, " {}", request);
        };

        self.set_color(Color::Green)?;
        write!(self.stdout, "✓")?;
        self.reset()?;
        writeln!(self.stdout, " {}", request)?;

        self.set_dim()?;
        writeln!(self.stdout, "  template: {}", found.template().text())?;
        self.reset()?;

        for (param, value) in found.values() {
            self.set_color(Color::Cyan)?;
            write!(self.stdout, "  {}", param)?;
            self.reset()?;
            writeln!(self.stdout, " = {}", value)?;
        }

        let extra = found.len().saturating_sub(found.template().parameters().len());
        if extra > 0 {
            let captures: Vec<&str> = (0..found.len()).filter_map(|i| found.at(i).ok()).collect();
            self.set_dim()?;
            writeln!(self.stdout, "  captures: {}", captures.join(", "))?;
            self.reset()?;
        }

        Ok(())
    }
}

pub fn result_json(request: &str, found: Option<&Match<'_>>) -> serde_json::Value {
    let Some(found) = found else {
        return json!({
            "request": request,
            "matched": false,
        });
    };

    let parameters: Vec<_> = found
        .values()
        .map(|(param, value)| {
            json!({
                "name": param.name(),
                "type": param.type_tag(),
                "value": value,
            })
        })
        .collect();
    let captures: Vec<&str> = (0..found.len()).filter_map(|i| found.at(i).ok()).collect();

    json!({
        "request": request,
        "matched": true,
        "template": found.template().text(),
        "parameters": parameters,
        "captures": captures,
    })
}
