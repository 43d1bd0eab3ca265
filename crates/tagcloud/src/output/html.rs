//! Standalone HTML page with one styled `<span>` per word.

use std::io::Write;

use super::{OutputOptions, escape_html, heading};
use crate::cloud::{Cloud, MAX_TIER, MIN_TIER};

pub(super) fn write_html(
    out: &mut dyn Write,
    source: &str,
    cloud: &Cloud,
    opts: &OutputOptions,
) -> std::io::Result<()> {
    let title = escape_html(&heading(source, cloud));

    writeln!(out, "<html>")?;
    writeln!(out, "\t<head>")?;
    writeln!(out, "\t\t<title>{title}</title>")?;
    if opts.embed_style {
        write_style(out)?;
    } else {
        writeln!(
            out,
            "\t\t<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            escape_html(&opts.stylesheet)
        )?;
    }
    writeln!(out, "\t</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "\t<h2>{title}</h2>")?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "\t<p class=\"cbox\">")?;

    for entry in &cloud.entries {
        writeln!(
            out,
            "\t\t<span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>",
            entry.tier,
            entry.count,
            escape_html(&entry.word)
        )?;
    }

    writeln!(out, "\t</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

/// Inline rules giving tier `fN` a font size of `N` points.
fn write_style(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "\t\t<style>")?;
    writeln!(out, "\t\t\t.cdiv {{ width: 600px; margin: 0 auto; }}")?;
    writeln!(out, "\t\t\t.cbox {{ line-height: 1.4; text-align: center; }}")?;
    for tier in MIN_TIER..=MAX_TIER {
        writeln!(out, "\t\t\t.f{tier} {{ font-size: {tier}pt; }}")?;
    }
    writeln!(out, "\t\t</style>")
}
