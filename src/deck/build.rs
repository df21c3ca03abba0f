use super::data::{atp_series, growth_table, GROWTH_COLUMNS};
use super::variant::{DeckVariant, AUDIO_URL, VIDEO_URL};
use super::{Block, Deck, MediaKind, Tone};
use crate::chart;
use crate::seq::BaseTally;

use indoc::{formatdoc, indoc};

/// Source shown on the code slide.
const COUNT_BASES_SOURCE: &str = indoc! {r#"
    fn count_bases(dna: &str) -> [(char, usize); 4] {
        let mut counts = [('A', 0), ('T', 0), ('G', 0), ('C', 0)];
        for c in dna.chars() {
            if let Some(slot) = counts.iter_mut().find(|(base, _)| *base == c) {
                slot.1 += 1;
            }
        }
        counts
    }

    let sample = "ATCGATTGAGCTCTAGCG";
    count_bases(sample);
"#};

fn text(s: &str) -> String {
    s.to_string()
}

/// Assemble the slideshow for `variant`, counting the bases of `sample` for
/// the code output slide.
pub fn build_deck(variant: DeckVariant, sample: &str) -> Deck {
    let t = variant.text();
    let table = growth_table();
    let tally = BaseTally::count(sample);
    debug!("Building {variant:?} deck, sample tally {tally}");

    let technologies: Vec<String> = table.iter().map(|r| text(r.technology)).collect();

    let bar = chart::bar_chart(
        t.bar_title,
        &technologies,
        &[
            (text(GROWTH_COLUMNS[1]), table.iter().map(|r| r.y2022 as f64).collect::<Vec<f64>>()),
            (text(GROWTH_COLUMNS[2]), table.iter().map(|r| r.y2025 as f64).collect::<Vec<f64>>()),
        ],
    );
    let pie_slices: Vec<(String, f64)> = table
        .iter()
        .map(|r| (text(r.technology), r.y2025 as f64))
        .collect();
    let pie = chart::pie_chart(t.pie_title, &pie_slices);
    let line = chart::line_chart(t.line_title, &atp_series(), t.line_x_label, t.line_y_label);

    let echo_source = formatdoc! {"
        let sample = {sample:?};
        let result = BaseTally::count(sample);
        println!(\"{label} {{result}}\");
        ",
        label = t.result_label,
    };

    let mut blocks = vec![
        Block::Header { text: text(t.intro_heading) },
        Block::Prose { text: text(t.intro) },
        Block::Divider,
        Block::Subheader { text: text(t.image_heading) },
        Block::Media {
            media: MediaKind::Image,
            url: text(t.image_url),
            caption: Some(text(t.image_caption)),
        },
        Block::Subheader { text: text(t.audio_heading) },
        Block::Media { media: MediaKind::Audio, url: text(AUDIO_URL), caption: None },
        Block::Subheader { text: text(t.video_heading) },
        Block::Media { media: MediaKind::Video, url: text(VIDEO_URL), caption: None },
        Block::Divider,
        Block::Subheader { text: text(t.formula_heading) },
        Block::Formula { latex: text("E = mc^2") },
        Block::Prose { text: text(t.formula_note) },
        Block::Header { text: text(t.table_heading) },
        Block::Table {
            columns: GROWTH_COLUMNS.iter().map(|c| text(c)).collect(),
            rows: table
                .iter()
                .map(|r| vec![text(r.technology), r.y2022.to_string(), r.y2025.to_string()])
                .collect(),
        },
        Block::Subheader { text: text(t.bar_heading) },
        Block::Chart { title: text(t.bar_title), svg: bar },
        Block::Subheader { text: text(t.pie_heading) },
        Block::Chart { title: text(t.pie_title), svg: pie },
        Block::Subheader { text: text(t.line_heading) },
        Block::Chart { title: text(t.line_title), svg: line },
        Block::Divider,
        Block::Subheader { text: text(t.code_heading) },
        Block::Code { language: text("rust"), source: text(COUNT_BASES_SOURCE) },
        Block::Subheader { text: text(t.echo_heading) },
        Block::Echo {
            language: text("rust"),
            source: echo_source,
            label: text(t.result_label),
            output: tally.to_string(),
        },
        Block::Subheader { text: text(t.callout_heading) },
    ];

    let tones = [Tone::Info, Tone::Success, Tone::Warning, Tone::Error];
    blocks.extend(
        tones
            .into_iter()
            .zip(t.callouts)
            .map(|(tone, msg)| Block::Callout { tone, text: text(msg) }),
    );
    blocks.push(Block::Divider);

    Deck {
        title: text(t.title),
        caption: t.caption.map(text),
        blocks,
        closing: t.closing.map(text),
    }
}
