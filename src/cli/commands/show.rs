use crate::cli::commands::load_filtered;
use crate::cli::parser::{Cli, Commands, ShowWhat};
use crate::config::Config;
use crate::core::calculator::aggregate::AggTime;
use crate::core::calculator::timeline::Timeline;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::stream::Stream;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{CYAN, color_for_track, colorize_label};
use crate::utils::table::{Column, Table};
use crate::utils::{display_label, format_duration, format_time};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        what,
        by,
        top,
        period,
        no_system,
    } = &cli.command
    {
        let stream = load_filtered(cli.input.as_ref(), cfg, period.as_ref(), *no_system)?;
        let mode = by.unwrap_or(cfg.label_mode);
        let top = top.unwrap_or(cfg.max_bars);

        if *what == ShowWhat::List {
            print_list(&stream, cfg);
            return Ok(());
        }

        let Some(report) = Core::build_report(&stream, mode, top) else {
            warning("No snapshots to show.");
            return Ok(());
        };

        info(format!(
            "{} snapshots from {} to {} ({}), grouped by {}",
            report.snapshots,
            format_time(&report.timeline.start, &cfg.time_format),
            format_time(&report.timeline.end, &cfg.time_format),
            format_duration(report.timeline.duration()),
            mode.lm_as_str()
        ));

        match what {
            ShowWhat::Stats => print_stats(&report.agg, top, cfg),
            ShowWhat::Timeline => print_timeline(&report.timeline, cfg),
            ShowWhat::List => {}
        }
    }
    Ok(())
}

fn print_list(stream: &Stream, cfg: &Config) {
    if stream.is_empty() {
        warning("No snapshots to show.");
        return;
    }

    for snap in stream.snapshots() {
        header(format_time(&snap.time, &cfg.time_format), CYAN);
        for w in &snap.windows {
            let mut flags = String::new();
            if w.id == snap.active {
                flags.push('*');
            }
            if snap.visible.contains(&w.id) {
                flags.push('v');
            }
            println!("{:<2} {:>12} {}", flags, w.id, w.name);
        }
        if snap.active_window().is_none() {
            println!("   active: {}", cfg.missing_label);
        }
    }
}

fn print_stats(agg: &AggTime, top: usize, cfg: &Config) {
    for (track, chart) in agg.charts() {
        header(&chart.title, color_for_track(track));
        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new(&chart.x_label, 48),
            Column::new(&chart.y_label, 8),
        ]);
        for (i, bar) in chart.top_n(top).iter().enumerate() {
            let label = display_label(&bar.label, &cfg.missing_label);
            table.add_row(vec![
                (i + 1).to_string(),
                label.to_string(),
                bar.count.to_string(),
            ]);
        }
        print!("{}", table.render());
    }
}

fn print_timeline(timeline: &Timeline, cfg: &Config) {
    for (track, ranges) in timeline.rows() {
        header(track.as_str(), color_for_track(track));
        for r in ranges {
            let label = display_label(&r.label, &cfg.missing_label);
            println!(
                "{} → {}  {:>12}  {}",
                format_time(&r.start, &cfg.time_format),
                format_time(&r.end, &cfg.time_format),
                format_duration(r.duration()),
                colorize_label(label, r.label.is_empty())
            );
        }
    }
}
