//! Profile block: title, issue date, photo box and the identity / contact rows.
//! Shared verbatim by both variants.

use chrono::NaiveDate;

use crate::layout::canvas::{Canvas, TextStyle};
use crate::layout::PAGE_CENTER_X;
use crate::render::backend::DrawingBackend;
use crate::resume::models::BasicInfo;

const TITLE_Y: f32 = 280.0;
/// Top edge of the identity box and photo box.
const PROFILE_TOP: f32 = 270.0;
const LEFT: f32 = 15.0;
const LABEL_X: f32 = 20.0;
const VALUE_X: f32 = 40.0;

const TITLE: TextStyle = TextStyle::sized(18.0).centered().baseline(0.35);
const LABEL: TextStyle = TextStyle::sized(8.0);
const VALUE: TextStyle = TextStyle::sized(10.0);

/// `2024年 04月 01日 現在`
pub fn issue_stamp(date: NaiveDate) -> String {
    date.format("%Y年 %m月 %d日 現在").to_string()
}

/// Draws the profile block and returns the bottom edge of the contact row.
pub fn draw_profile<B: DrawingBackend>(
    canvas: &mut Canvas<'_, B>,
    info: &BasicInfo,
    issued_on: NaiveDate,
) -> f32 {
    canvas.text(PAGE_CENTER_X, TITLE_Y, "履 歴 書", TITLE);
    canvas.text(195.0, TITLE_Y, &issue_stamp(issued_on), VALUE.right());

    let top = PROFILE_TOP;

    // Photo box, 30 × 40.
    canvas.rect(155.0, top - 40.0, 30.0, 40.0);
    canvas.text(170.0, top - 18.0, "写真を貼る位置", LABEL.centered());
    canvas.text(170.0, top - 23.0, "(縦40mm 横30mm)", TextStyle::sized(6.0).centered());

    canvas.rect(LEFT, top - 25.0, 130.0, 25.0);
    canvas.text(LABEL_X, top - 6.0, "ふりがな", TextStyle::sized(6.0));
    canvas.text(VALUE_X, top - 6.0, &info.kana, VALUE);
    canvas.text(LABEL_X, top - 18.0, "氏 名", LABEL);
    canvas.text(VALUE_X, top - 20.0, &info.name, TextStyle::sized(16.0));

    canvas.rect(LEFT, top - 35.0, 130.0, 10.0);
    canvas.text(LABEL_X, top - 32.0, "生年月日", LABEL);
    canvas.text(45.0, top - 32.0, &format!("{}生", info.birth_date), VALUE);
    canvas.text(100.0, top - 32.0, "性別", LABEL);
    canvas.text(120.0, top - 32.0, &info.gender, VALUE);

    let rows_top = top - 35.0;

    canvas.rect(LEFT, rows_top - 20.0, 170.0, 15.0);
    canvas.text(LABEL_X, rows_top - 10.0, "現住所", LABEL);
    canvas.text(VALUE_X, rows_top - 12.0, &info.address, VALUE);

    let contact_bottom = rows_top - 30.0;
    canvas.rect(LEFT, contact_bottom, 170.0, 10.0);
    canvas.text(LABEL_X, rows_top - 27.0, "電話", LABEL);
    canvas.text(VALUE_X, rows_top - 27.0, &info.phone, VALUE);
    canvas.text(85.0, rows_top - 27.0, "E-mail", LABEL);
    canvas.text(105.0, rows_top - 27.0, &info.email, VALUE);

    contact_bottom
}
