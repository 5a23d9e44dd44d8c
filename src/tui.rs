//! Terminal user interface components.
//!
//! Themed status lines, progress display for the discovery and extraction
//! phases, and the final genre distribution chart.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;

pub const BANNER: &str = r#"
 ███╗   ███╗██╗   ██╗██╗   ██╗██╗███████╗
 ████╗ ████║██║   ██║██║   ██║██║╚══███╔╝
 ██╔████╔██║██║   ██║██║   ██║██║  ███╔╝
 ██║╚██╔╝██║██║   ██║╚██╗ ██╔╝██║ ███╔╝
 ██║ ╚═╝ ██║╚██████╔╝ ╚████╔╝ ██║███████╗
 ╚═╝     ╚═╝ ╚═════╝   ╚═══╝  ╚═╝╚══════╝"#;

pub struct UI {
    pub term: Term,
    pub color_theme: String,
}

impl UI {
    pub fn new() -> io::Result<Self> {
        let term = Term::stdout();
        Ok(Self {
            term,
            color_theme: "default".to_string(),
        })
    }

    pub fn with_color_theme(mut self, theme: String) -> Self {
        self.color_theme = theme;
        self
    }

    /// Get the console::Style for the configured theme
    fn get_style(&self) -> console::Style {
        use console::Style;

        match self.color_theme.as_str() {
            "cyan" => Style::new().cyan(),
            "magenta" => Style::new().magenta(),
            "green" => Style::new().green(),
            "yellow" => Style::new().yellow(),
            _ => Style::new().white(),
        }
    }

    /// Get shades for status codes based on the theme string.
    /// Returns (info_style, warning_style, error_style, success_style)
    pub fn get_status_styles(
        theme: &str,
    ) -> (
        console::Style,
        console::Style,
        console::Style,
        console::Style,
    ) {
        use console::Style;

        match theme {
            "cyan" => (
                Style::new().cyan(),
                Style::new().color256(51),
                Style::new().color256(87),
                Style::new().color256(123),
            ),
            "magenta" => (
                Style::new().magenta(),
                Style::new().color256(201),
                Style::new().color256(126),
                Style::new().color256(213),
            ),
            "green" => (
                Style::new().green(),
                Style::new().color256(46),
                Style::new().color256(28),
                Style::new().color256(120),
            ),
            "yellow" => (
                Style::new().yellow(),
                Style::new().color256(226),
                Style::new().color256(178),
                Style::new().color256(227),
            ),
            _ => (
                Style::new().white(),
                Style::new().color256(255),
                Style::new().color256(250),
                Style::new().color256(255),
            ),
        }
    }

    /// Get spinner color string for progress bar templates
    fn get_spinner_color(&self) -> &str {
        match self.color_theme.as_str() {
            "cyan" => ".cyan",
            "magenta" => ".magenta",
            "green" => ".green",
            "yellow" => ".yellow",
            _ => ".white",
        }
    }

    /// Get bar colors (spinner_color, bar_color) for progress bar templates
    fn get_bar_colors(&self) -> (&str, &str) {
        match self.color_theme.as_str() {
            "cyan" => (".cyan", "bright_cyan/bright_cyan"),
            "magenta" => (".magenta", "bright_magenta/bright_magenta"),
            "green" => (".green", "bright_green/bright_green"),
            "yellow" => (".yellow", "bright_yellow/bright_yellow"),
            _ => (".white", "bright_white/bright_white"),
        }
    }

    /// Create a themed ColorfulTheme for dialoguer prompts
    pub fn get_colorful_theme(theme: &str) -> ColorfulTheme {
        use console::{Style, style};

        match theme {
            "cyan" => ColorfulTheme {
                values_style: Style::new().cyan(),
                active_item_style: Style::new().cyan().bold(),
                active_item_prefix: style("❯".to_string()).cyan().bold(),
                ..ColorfulTheme::default()
            },
            "magenta" => ColorfulTheme {
                values_style: Style::new().magenta(),
                active_item_style: Style::new().magenta().bold(),
                active_item_prefix: style("❯".to_string()).magenta().bold(),
                ..ColorfulTheme::default()
            },
            "green" => ColorfulTheme {
                values_style: Style::new().green(),
                active_item_style: Style::new().green().bold(),
                active_item_prefix: style("❯".to_string()).green().bold(),
                ..ColorfulTheme::default()
            },
            "yellow" => ColorfulTheme {
                values_style: Style::new().yellow(),
                active_item_style: Style::new().yellow().bold(),
                active_item_prefix: style("❯".to_string()).yellow().bold(),
                ..ColorfulTheme::default()
            },
            _ => ColorfulTheme::default(),
        }
    }

    /// Print the banner block
    pub fn print_banner(&self) -> io::Result<()> {
        use console::Style;
        let style = self.get_style();
        let white_bold = Style::new().white().bold();

        println!("{}", style.apply_to(BANNER).bold());
        println!();
        println!("{}", white_bold.apply_to("=".repeat(70)));

        Ok(())
    }

    /// Init the UI with banner and a context message
    pub fn init(&self, message: &str) -> io::Result<()> {
        use console::Style;
        let white_bold = Style::new().white().bold();

        self.term.clear_screen()?;
        self.term.hide_cursor()?;

        self.print_banner()?;

        if !message.is_empty() {
            println!();
            println!("{}", white_bold.apply_to(message));
            println!();
        }

        Ok(())
    }

    /// Create a counting spinner for the discovery walk (unknown total)
    pub fn create_counting_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let spinner_color = self.get_spinner_color();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(&format!("{{spinner:{}}} {{pos}} {{msg}}", spinner_color))
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Create a progress bar with known total for the extraction phase
    pub fn create_progress_bar(&self, total: u64, message: &str) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let (spinner_color, bar_color) = self.get_bar_colors();
        pb.set_style(
            ProgressStyle::default_bar()
                .template(&format!(
                    "{{spinner:{}}} {{bar:40.{}/{}}} {{pos}}/{{len}} ({{percent}}%) {{msg}}",
                    spinner_color, bar_color, bar_color
                ))
                .unwrap()
                .progress_chars("█ ")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Print an info message
    pub fn print_info(&self, message: &str) -> io::Result<()> {
        use console::Style;
        let (info_style, _, _, _) = Self::get_status_styles(&self.color_theme);
        let white_bold = Style::new().white().bold();
        println!(
            "{} {}",
            info_style.apply_to("[*]").bold(),
            white_bold.apply_to(message)
        );
        Ok(())
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) -> io::Result<()> {
        use console::Style;
        let (_, _, error_style, _) = Self::get_status_styles(&self.color_theme);
        let white_bold = Style::new().white().bold();
        println!(
            "{} {}",
            error_style.apply_to("[!] ERROR:").bold(),
            white_bold.apply_to(message)
        );
        Ok(())
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) -> io::Result<()> {
        use console::Style;
        let (_, _, _, success_style) = Self::get_status_styles(&self.color_theme);
        let white_bold = Style::new().white().bold();
        println!(
            "{} {}",
            success_style.apply_to("[✓]").bold(),
            white_bold.apply_to(message)
        );
        Ok(())
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) -> io::Result<()> {
        use console::Style;
        let (_, warning_style, _, _) = Self::get_status_styles(&self.color_theme);
        let white_bold = Style::new().white().bold();
        println!(
            "{} {}",
            warning_style.apply_to("[!] WARNING:").bold(),
            white_bold.apply_to(message)
        );
        Ok(())
    }

    /// Print the final genre distribution
    pub fn print_distribution(&self, stats: &[(String, usize)]) -> io::Result<()> {
        use console::Style;
        let style = self.get_style();
        let white_bold = Style::new().white().bold();

        let total: usize = stats.iter().map(|(_, count)| count).sum();

        println!();
        println!("{}", style.apply_to("GENRE DISTRIBUTION").bold());
        println!();
        println!("{}", white_bold.apply_to("=".repeat(70)));
        println!(
            "  {} {} {}",
            style.apply_to("TOTAL:").bold(),
            white_bold.apply_to(format!("{}", total)).italic(),
            white_bold.apply_to("tracks"),
        );
        println!("{}", white_bold.apply_to("=".repeat(70)));
        println!();

        for line in create_genre_chart(stats) {
            println!("  {}", line);
        }
        println!();

        Ok(())
    }

    /// Cleanup the terminal (show cursor, etc.)
    pub fn cleanup(&self) -> io::Result<()> {
        self.term.show_cursor()?;
        Ok(())
    }
}

impl Drop for UI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Truncate a path for the one-line progress status, respecting UTF-8
/// character boundaries.
pub(crate) fn truncate_status(path: &str) -> String {
    const MAX_LEN: usize = 60;
    const PREFIX_LEN: usize = 24;
    const SUFFIX_LEN: usize = 32;

    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= MAX_LEN {
        return path.to_string();
    }

    let prefix: String = chars.iter().take(PREFIX_LEN).collect();
    let suffix: String = chars.iter().skip(chars.len() - SUFFIX_LEN).collect();

    format!("{}...{}", prefix, suffix)
}

// Helper function to build the fixed-width genre distribution chart
pub fn create_genre_chart(stats: &[(String, usize)]) -> Vec<String> {
    use console::Style;

    let mut lines = Vec::new();
    let white_bold = Style::new().white().bold();

    let total: usize = stats.iter().map(|(_, count)| count).sum();
    if total == 0 {
        lines.push(format!("{}", white_bold.apply_to("No data to display")));
        return lines;
    }

    // Sort labels by count descending
    let mut sorted_stats: Vec<_> = stats.iter().collect();
    sorted_stats.sort_by(|a, b| b.1.cmp(&a.1));

    const BAR_WIDTH: usize = 40;
    let block = "█";

    for (label, count) in sorted_stats {
        let share = *count as f64 / total as f64;
        let bar_length = (share * BAR_WIDTH as f64) as usize;

        let bar = if bar_length > 0 {
            block.repeat(bar_length)
        } else {
            " ".to_string()
        };

        let label_text = format!("{}:", label);
        let noun = if *count == 1 { "file" } else { "files" };

        let line = format!(
            "{} {:<18} {}{} {} ({} {})",
            block,
            label_text,
            bar,
            " ".repeat(BAR_WIDTH.saturating_sub(bar_length)),
            white_bold
                .apply_to(format!("{:>6.2}%", share * 100.0))
                .italic(),
            white_bold.apply_to(format!("{}", count)).italic(),
            noun,
        );

        lines.push(format!("{}", white_bold.apply_to(line)));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_chart_empty() {
        let lines = create_genre_chart(&[]);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No data to display"));
    }

    #[test]
    fn test_genre_chart_percentages() {
        let stats = vec![("rock".to_string(), 3), ("jazz".to_string(), 1)];

        let lines = create_genre_chart(&stats);

        assert_eq!(lines.len(), 2);
        // Sorted descending, so rock comes first at 75%.
        assert!(lines[0].contains("rock:"));
        assert!(lines[0].contains("75.00%"));
        assert!(lines[1].contains("jazz:"));
        assert!(lines[1].contains("25.00%"));
    }

    #[test]
    fn test_genre_chart_singular_file_count() {
        let stats = vec![("ambient".to_string(), 1)];

        let lines = create_genre_chart(&stats);

        assert!(lines[0].contains("1 file"));
        assert!(!lines[0].contains("1 files"));
    }

    #[test]
    fn test_truncate_status_short_path_unchanged() {
        assert_eq!(truncate_status("/music/a.mp3"), "/music/a.mp3");
    }

    #[test]
    fn test_truncate_status_long_path() {
        let long = format!("/music/{}/track.mp3", "x".repeat(100));
        let truncated = truncate_status(&long);

        assert!(truncated.len() < long.len());
        assert!(truncated.contains("..."));
        assert!(truncated.ends_with("track.mp3"));
    }

    #[test]
    fn test_truncate_status_multibyte_safe() {
        let long = "日本語のディレクトリ".repeat(12);
        // Must not panic on non-ASCII boundaries.
        let _ = truncate_status(&long);
    }
}
