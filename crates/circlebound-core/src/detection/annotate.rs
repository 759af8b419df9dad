use crate::frame::Frame;

/// Draw a circle outline of the given thickness, clipped to the frame.
///
/// A pixel is painted when its distance to `center` is within half the
/// thickness of `radius`.
pub fn draw_circle(
    frame: &mut Frame,
    center: (i64, i64),
    radius: u32,
    thickness: u32,
    bgr: [u8; 3],
) {
    let half = thickness.max(1) as f64 / 2.0;
    let r = radius as f64;
    let reach = (r + half).ceil() as i64 + 1;
    paint_disk_region(frame, center, reach, bgr, |dist| (dist - r).abs() <= half);
}

/// Draw a filled disk, clipped to the frame.
pub fn fill_circle(frame: &mut Frame, center: (i64, i64), radius: u32, bgr: [u8; 3]) {
    let r = radius as f64 + 0.5;
    let reach = radius as i64 + 1;
    paint_disk_region(frame, center, reach, bgr, |dist| dist <= r);
}

fn paint_disk_region<F>(frame: &mut Frame, center: (i64, i64), reach: i64, bgr: [u8; 3], inside: F)
where
    F: Fn(f64) -> bool,
{
    let (cx, cy) = center;
    let y_min = (cy - reach).max(0);
    let y_max = (cy + reach).min(frame.height() as i64 - 1);
    let x_min = (cx - reach).max(0);
    let x_max = (cx + reach).min(frame.width() as i64 - 1);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = (x - cx) as f64;
            let dy = (y - cy) as f64;
            if inside((dx * dx + dy * dy).sqrt()) {
                frame.put_pixel(x, y, bgr);
            }
        }
    }
}
