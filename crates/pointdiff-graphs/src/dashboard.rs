//! Single-page dashboard holding the animated chart.
//!
//! Frames are inlined as SVG and toggled by a small player script. The week
//! list and the frame duration are embedded as JSON so the script needs no
//! further requests.

use crate::RenderedFrame;
use pointdiff_common::{escape_html, Result, Week};
use pointdiff_config::Config;
use tracing::debug;

const STYLE: &str = r"
body { margin: 0; font-family: sans-serif; background: #fafafa; color: #222; }
h1 { margin: 0; padding: 16px 24px; font-size: 24px; }
.panel { width: 100%; box-sizing: border-box; padding: 0 24px 24px; }
.frame svg { width: 100%; height: auto; display: block; }
.controls { display: flex; align-items: center; gap: 12px; padding-top: 12px; }
.controls input[type=range] { flex: 1; }
";

const PLAYER: &str = r"
(() => {
  const frames = document.querySelectorAll('#chart .frame');
  const slider = document.getElementById('slider');
  const button = document.getElementById('play');
  const label = document.getElementById('week-label');
  let current = 0;
  let timer = null;

  function show(index) {
    frames.forEach((frame, i) => { frame.hidden = i !== index; });
    current = index;
    slider.value = index;
    label.textContent = 'Week ' + WEEKS[index];
  }

  function stop() {
    clearInterval(timer);
    timer = null;
    button.textContent = 'Play';
  }

  function play() {
    if (current === frames.length - 1) { show(0); }
    button.textContent = 'Pause';
    timer = setInterval(() => {
      if (current + 1 >= frames.length) { stop(); return; }
      show(current + 1);
    }, FRAME_MS);
  }

  button.addEventListener('click', () => (timer ? stop() : play()));
  slider.addEventListener('input', () => { stop(); show(Number(slider.value)); });
  show(0);
})();
";

/// Assembles the dashboard page.
#[derive(Debug, Clone)]
pub struct Dashboard {
    page_title: String,
    frame_duration_ms: u64,
}

impl Dashboard {
    pub fn new(page_title: impl Into<String>, frame_duration_ms: u64) -> Self {
        Self {
            page_title: page_title.into(),
            frame_duration_ms,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.dashboard.page_title.clone(),
            config.chart.frame_duration_ms,
        )
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub const fn frame_duration_ms(&self) -> u64 {
        self.frame_duration_ms
    }

    /// Builds the full HTML document.
    ///
    /// Frames without a week (the empty-table placeholder) are shown as a
    /// static chart without player controls.
    pub fn render_page(&self, frames: &[RenderedFrame]) -> Result<String> {
        let weeks: Vec<Week> = frames.iter().filter_map(|f| f.week).collect();
        let title = escape_html(&self.page_title);

        let mut html = String::with_capacity(frames.iter().map(|f| f.svg.len()).sum::<usize>() + 4096);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"));
        html.push_str(&format!("<h1>{title}</h1>\n<section class=\"panel\" id=\"chart\">\n"));

        for (index, frame) in frames.iter().enumerate() {
            let week_attr = frame
                .week
                .map(|w| format!(" data-week=\"{w}\""))
                .unwrap_or_default();
            let hidden = if index == 0 { "" } else { " hidden" };
            html.push_str(&format!("<div class=\"frame\"{week_attr}{hidden}>\n"));
            html.push_str(&frame.svg);
            html.push_str("\n</div>\n");
        }

        if !weeks.is_empty() {
            let max_index = weeks.len() - 1;
            html.push_str(&format!(
                "<div class=\"controls\">\n<button id=\"play\" type=\"button\">Play</button>\n\
                 <input id=\"slider\" type=\"range\" min=\"0\" max=\"{max_index}\" step=\"1\" value=\"0\">\n\
                 <span id=\"week-label\">Week {}</span>\n</div>\n",
                weeks[0]
            ));
        }
        html.push_str("</section>\n");

        if !weeks.is_empty() {
            let weeks_json = serde_json::to_string(&weeks)?;
            html.push_str(&format!(
                "<script>\nconst WEEKS = {weeks_json};\nconst FRAME_MS = {};\n{PLAYER}</script>\n",
                self.frame_duration_ms
            ));
        }
        html.push_str("</body>\n</html>\n");

        debug!(frames = frames.len(), bytes = html.len(), "Assembled dashboard page");
        Ok(html)
    }
}
