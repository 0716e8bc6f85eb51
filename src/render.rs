//! Schedule Sheet Rendering
//!
//! Draws the printable schedule (date heading, logo, group cards) onto an
//! off-screen canvas and reads the pixels back for the PDF export. Layout is
//! computed separately from drawing so it can be checked without a browser.

use schedule_core::{sheet_heading, ExportError, ExportResult, Group, RasterImage};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

/// Page padding, CSS px
const PADDING: f64 = 20.0;
const CARD_WIDTH: f64 = 300.0;
const CARD_GAP: f64 = 15.0;
const CARD_PADDING: f64 = 10.0;
const CARD_RADIUS: f64 = 8.0;
const COLUMNS: usize = 3;

const DATE_LINE: f64 = 34.0;
const LOGO_WIDTH: f64 = 100.0;
const LOGO_MARGIN: f64 = 10.0;

const LOCATION_LINE: f64 = 24.0;
const FOREMAN_LINE: f64 = 26.0;
const HELPER_LINE: f64 = 20.0;
const DETAILS_LINE: f64 = 26.0;

/// Device pixels per CSS pixel in the captured raster
const RASTER_SCALE: f64 = 2.0;

/// Card rectangle in sheet coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Sheet size, logo slot and one box per group, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub width: f64,
    pub height: f64,
    pub date_y: Option<f64>,
    /// (y, height) of the logo when present
    pub logo: Option<(f64, f64)>,
    pub cards: Vec<CardBox>,
}

pub fn card_height(group: &Group) -> f64 {
    let details = if group.details.is_empty() { 0.0 } else { DETAILS_LINE };
    CARD_PADDING * 2.0
        + LOCATION_LINE
        + FOREMAN_LINE
        + HELPER_LINE * group.helpers.len() as f64
        + details
}

/// Logo height when drawn `LOGO_WIDTH` wide
pub fn logo_height(natural_width: u32, natural_height: u32) -> f64 {
    if natural_width == 0 {
        return 0.0;
    }
    LOGO_WIDTH * natural_height as f64 / natural_width as f64
}

/// Lay out cards in rows of `COLUMNS`; every card in a row takes the row's tallest height
pub fn layout_sheet(groups: &[Group], has_date: bool, logo_h: Option<f64>) -> SheetLayout {
    let width = PADDING * 2.0 + CARD_WIDTH * COLUMNS as f64 + CARD_GAP * (COLUMNS - 1) as f64;
    let mut y = PADDING;

    let date_y = has_date.then(|| {
        let at = y;
        y += DATE_LINE;
        at
    });
    let logo = logo_h.map(|h| {
        let at = y;
        y += h + LOGO_MARGIN;
        (at, h)
    });

    let mut cards = Vec::with_capacity(groups.len());
    for row in groups.chunks(COLUMNS) {
        let row_h = row.iter().map(card_height).fold(0.0, f64::max);
        for col in 0..row.len() {
            cards.push(CardBox {
                x: PADDING + col as f64 * (CARD_WIDTH + CARD_GAP),
                y,
                width: CARD_WIDTH,
                height: row_h,
            });
        }
        y += row_h + CARD_GAP;
    }
    if !groups.is_empty() {
        y -= CARD_GAP;
    }

    SheetLayout {
        width,
        height: y + PADDING,
        date_y,
        logo,
        cards,
    }
}

fn js_err(err: JsValue) -> ExportError {
    ExportError::Browser(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Render the sheet and return its pixels
pub fn capture_schedule(
    document: &Document,
    date: &str,
    groups: &[Group],
    logo: Option<&HtmlImageElement>,
) -> ExportResult<RasterImage> {
    let logo_h = logo.map(|img| logo_height(img.natural_width(), img.natural_height()));
    let heading = sheet_heading(date);
    let layout = layout_sheet(groups, heading.is_some(), logo_h);

    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ExportError::Browser("canvas element unavailable".to_string()))?;
    let px_width = (layout.width * RASTER_SCALE).ceil() as u32;
    let px_height = (layout.height * RASTER_SCALE).ceil() as u32;
    canvas.set_width(px_width);
    canvas.set_height(px_height);

    let ctx = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| ExportError::Browser("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ExportError::Browser("2d context has wrong type".to_string()))?;

    ctx.scale(RASTER_SCALE, RASTER_SCALE).map_err(js_err)?;
    draw_sheet(&ctx, &layout, heading.unwrap_or_default(), groups, logo).map_err(js_err)?;

    let data = ctx
        .get_image_data(0.0, 0.0, px_width as f64, px_height as f64)
        .map_err(js_err)?;
    let raster = RasterImage::new(data.width(), data.height(), data.data().0)?;
    log::debug!("[EXPORT] Captured {}x{} px sheet", raster.width(), raster.height());
    Ok(raster)
}

fn draw_sheet(
    ctx: &CanvasRenderingContext2d,
    layout: &SheetLayout,
    date: &str,
    groups: &[Group],
    logo: Option<&HtmlImageElement>,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

    ctx.set_text_align("left");
    ctx.set_text_baseline("top");

    if let Some(y) = layout.date_y {
        ctx.set_fill_style_str("#000000");
        ctx.set_font("bold 20px Arial");
        ctx.fill_text(date, PADDING, y)?;
    }

    if let (Some((y, h)), Some(img)) = (layout.logo, logo) {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(img, PADDING, y, LOGO_WIDTH, h)?;
    }

    for (card, group) in layout.cards.iter().zip(groups) {
        draw_card(ctx, card, group)?;
    }
    Ok(())
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, b: &CardBox, r: f64) -> Result<(), JsValue> {
    let (x, y, w, h) = (b.x, b.y, b.width, b.height);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}

fn draw_card(ctx: &CanvasRenderingContext2d, card: &CardBox, group: &Group) -> Result<(), JsValue> {
    ctx.save();

    // Soft shadow, then body
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.05)");
    rounded_rect(ctx, &CardBox { x: card.x + 2.0, y: card.y + 2.0, ..*card }, CARD_RADIUS)?;
    ctx.fill();

    rounded_rect(ctx, card, CARD_RADIUS)?;
    ctx.set_fill_style_str("#f9f9f9");
    ctx.fill();
    ctx.set_stroke_style_str("#dddddd");
    ctx.set_line_width(1.0);
    ctx.stroke();

    let x = card.x + CARD_PADDING;
    let max_w = card.width - CARD_PADDING * 2.0;
    let mut y = card.y + CARD_PADDING;

    ctx.set_fill_style_str("#2b4d66");
    ctx.set_font("bold 17px Arial");
    ctx.fill_text_with_max_width(&group.location, x, y, max_w)?;
    y += LOCATION_LINE;

    ctx.set_fill_style_str("#000000");
    ctx.set_font("bold 15px Arial");
    ctx.fill_text_with_max_width(&format!("👷 {}", group.foreman), x, y, max_w)?;
    y += FOREMAN_LINE;

    ctx.set_font("15px Arial");
    for helper in &group.helpers {
        ctx.fill_text_with_max_width(&format!("🔧 {}", helper), x, y, max_w)?;
        y += HELPER_LINE;
    }

    if !group.details.is_empty() {
        ctx.set_fill_style_str("#666666");
        ctx.set_font("13px Arial");
        ctx.fill_text_with_max_width(&format!("📝 {}", group.details), x, y + 6.0, max_w)?;
    }

    ctx.restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedule_core::GroupId;

    fn group(helpers: usize, details: &str) -> Group {
        Group {
            id: GroupId(1),
            foreman: "Tom Inman".to_string(),
            helpers: (0..helpers).map(|i| format!("Helper {}", i)).collect(),
            location: "Site A".to_string(),
            details: details.to_string(),
        }
    }

    #[test]
    fn test_card_height_grows_with_helpers_and_details() {
        let base = card_height(&group(0, ""));
        assert_eq!(card_height(&group(2, "")), base + 2.0 * HELPER_LINE);
        assert_eq!(card_height(&group(0, "Roof")), base + DETAILS_LINE);
    }

    #[test]
    fn test_layout_wraps_rows() {
        let groups: Vec<Group> = (0..4).map(|i| group(i % 3, "")).collect();
        let layout = layout_sheet(&groups, false, None);

        assert_eq!(layout.cards.len(), 4);
        assert_eq!(layout.cards[0].y, layout.cards[2].y);
        assert_eq!(layout.cards[3].x, PADDING);
        // Second row starts below the tallest card of the first row
        assert_eq!(layout.cards[3].y, PADDING + card_height(&groups[2]) + CARD_GAP);
        assert_eq!(layout.height, layout.cards[3].y + card_height(&groups[3]) + PADDING);
    }

    #[test]
    fn test_cards_in_a_row_share_height() {
        let groups = vec![group(0, ""), group(3, "Roof"), group(1, "")];
        let layout = layout_sheet(&groups, false, None);

        let tallest = card_height(&groups[1]);
        assert!(layout.cards.iter().all(|c| c.height == tallest));
        assert_eq!(layout.height, PADDING + tallest + PADDING);
    }

    #[test]
    fn test_layout_reserves_header() {
        let layout = layout_sheet(&[group(1, "")], true, Some(50.0));
        assert_eq!(layout.date_y, Some(PADDING));
        assert_eq!(layout.logo, Some((PADDING + DATE_LINE, 50.0)));
        assert_eq!(layout.cards[0].y, PADDING + DATE_LINE + 50.0 + LOGO_MARGIN);
    }

    #[test]
    fn test_empty_sheet_has_padding_only() {
        let layout = layout_sheet(&[], false, None);
        assert!(layout.cards.is_empty());
        assert_eq!(layout.height, PADDING * 2.0);
    }

    #[test]
    fn test_logo_height_keeps_aspect() {
        assert_eq!(logo_height(200, 100), 50.0);
        assert_eq!(logo_height(0, 100), 0.0);
    }
}
