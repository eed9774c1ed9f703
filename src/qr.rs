//! Terminal QR code rendering

use qrcode::render::unicode;
use qrcode::QrCode;

use crate::error::WalletError;

/// Render `data` as a QR code made of unicode half blocks
///
/// Dark and light are swapped so the code scans on dark terminal themes,
/// and the quiet zone is kept.
pub fn render_qr(data: &str) -> Result<String, WalletError> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| WalletError::Qr(e.to_string()))?;
    let rendered = code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(true)
        .build();
    Ok(rendered)
}
