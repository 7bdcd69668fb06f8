use pegduo_core as game;

/// ANSI foreground escape for each peg, approximating its catalog color.
pub fn ansi_color(peg: game::Peg) -> &'static str {
    use game::Peg::*;
    match peg {
        Empty => "\x1b[37m",
        Red => "\x1b[31m",
        Green => "\x1b[32m",
        Blue => "\x1b[34m",
        Yellow => "\x1b[93m",
        Orange => "\x1b[38;5;208m",
        Brown => "\x1b[38;5;94m",
        Black => "\x1b[90m",
        White => "\x1b[97m",
    }
}

pub fn peg_tag(peg: game::Peg) -> String {
    format!("{}{}\x1b[0m", ansi_color(peg), peg.short_name())
}

pub fn peg_row(pegs: &[game::Peg]) -> String {
    pegs.iter()
        .map(|&peg| peg_tag(peg))
        .collect::<Vec<_>>()
        .join(" ")
}
