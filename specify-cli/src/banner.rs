//! ASCII art banner

use console::style;

const BANNER: &str = r"
███████╗██████╗ ███████╗ ██████╗██╗███████╗██╗   ██╗
██╔════╝██╔══██╗██╔════╝██╔════╝██║██╔════╝╚██╗ ██╔╝
███████╗██████╔╝█████╗  ██║     ██║█████╗   ╚████╔╝
╚════██║██╔═══╝ ██╔══╝  ██║     ██║██╔══╝    ╚██╔╝
███████║██║     ███████╗╚██████╗██║██║        ██║
╚══════╝╚═╝     ╚══════╝ ╚═════╝╚═╝╚═╝        ╚═╝
";

/// Tagline printed under the banner
pub const TAGLINE: &str = "Spec-Driven Development Scaffolding Engine";

/// Display the banner with a color gradient and tagline
pub fn show() {
    for (i, line) in BANNER.trim_matches('\n').lines().enumerate() {
        let styled = match i % 6 {
            0 => style(line).blue().bright(),
            1 => style(line).blue(),
            2 => style(line).cyan(),
            3 => style(line).cyan().bright(),
            4 => style(line).white(),
            _ => style(line).white().bright(),
        };
        println!("{styled}");
    }
    println!("{}", style(TAGLINE).yellow().bright().italic());
    println!();
}
