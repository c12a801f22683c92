use colored::*;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::config::ShelfConfig;
use shelf::index::DisplayBook;
use shelf::query::LibraryStats;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 40;
const AUTHOR_WIDTH: usize = 24;
const GENRE_WIDTH: usize = 14;
const BAR_WIDTH: usize = 30;
const BAR_CHAR: &str = "█";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", style_message(message));
    }
}

/// Load-time notices go to stderr so command output stays clean.
pub fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", style_message(message));
    }
}

fn style_message(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

pub fn print_books(books: &[DisplayBook]) {
    for dp in books {
        println!("{}", book_line(dp));
    }
}

fn book_line(dp: &DisplayBook) -> String {
    let idx = format!("{:>4}. ", dp.index.0);
    let title = pad_to_width(&truncate_to_width(&dp.book.title, TITLE_WIDTH), TITLE_WIDTH);
    let author = pad_to_width(&truncate_to_width(&dp.book.author, AUTHOR_WIDTH), AUTHOR_WIDTH);
    let genre = pad_to_width(&truncate_to_width(&dp.book.genre, GENRE_WIDTH), GENRE_WIDTH);
    let status = if dp.book.read {
        "Read".green()
    } else {
        "Unread".red()
    };

    format!(
        "{}{} {} {} {} {}",
        idx.yellow(),
        title.bold(),
        author.italic(),
        genre.cyan(),
        dp.book.year.to_string().dimmed(),
        status
    )
}

pub fn print_stats(stats: &LibraryStats, recent: &[DisplayBook]) {
    println!("{}", "Library Stats".bold());
    println!(
        "  Total Books: {}   Read: {} ({:.1}%)   Unread: {} ({:.1}%)   Unique Genres: {}",
        stats.total.to_string().bold(),
        stats.read.to_string().green(),
        stats.read_percentage,
        stats.unread.to_string().red(),
        stats.unread_percentage,
        stats.unique_genres()
    );

    if stats.total == 0 {
        return;
    }

    println!();
    println!("{}", "Genre Breakdown".bold());
    let genre_max = stats.genres.iter().map(|g| g.count).max().unwrap_or(0);
    let genre_width = stats
        .genres
        .iter()
        .map(|g| g.genre.width())
        .max()
        .unwrap_or(0);
    for g in &stats.genres {
        println!(
            "  {} {:>3} {}  {}",
            pad_to_width(&g.genre, genre_width),
            g.count,
            bar(g.count, genre_max).cyan(),
            format!("read {} / unread {}", g.read, g.unread).dimmed()
        );
    }

    println!();
    println!("{}", "Books by Publication Year".bold());
    let year_max = stats.years.iter().map(|(_, c)| *c).max().unwrap_or(0);
    for (year, count) in &stats.years {
        println!("  {} {:>3} {}", year, count, bar(*count, year_max).blue());
    }

    if !recent.is_empty() {
        println!();
        println!("{}", "Recently Added".bold());
        print_books(recent);
    }
}

pub fn print_genres(genres: &[String]) {
    if genres.is_empty() {
        println!("{}", "No genres yet.".dimmed());
        return;
    }
    for genre in genres {
        println!("{}", genre);
    }
}

pub fn print_config(config: &ShelfConfig) {
    println!(
        "library-file = {}",
        config
            .library_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(default)".to_string())
    );
    println!("keep-corrupt = {}", config.keep_corrupt);
    println!("recent-count = {}", config.recent_count);
}

/// A bar of up to `BAR_WIDTH` cells, scaled against `max`.
fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = if max <= BAR_WIDTH {
        count
    } else {
        (count * BAR_WIDTH).div_ceil(max)
    };
    BAR_CHAR.repeat(cells)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
