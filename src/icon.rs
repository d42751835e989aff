use image::{Rgba, RgbaImage};

// Master canvas edge; smaller sizes are resampled from this render.
pub const MASTER_SIZE: u32 = 1024;

// Palette: warm sun on an amber rounded-rect background.
const BACKGROUND: [u8; 4] = [220, 120, 50, 255];
const SUN_FILL: [u8; 4] = [255, 248, 220, 255];
const SUN_OUTLINE: [u8; 4] = [255, 220, 150, 255];
const RAY_FILL: [u8; 4] = [255, 230, 160, 255];

const RAY_COUNT: usize = 8;
const RAY_HALF_WIDTH_DEG: f32 = 20.0;

/// Render the icon at the given pixel size: rounded amber background,
/// cream sun disc with a lighter rim, eight rays at 45° steps painted
/// over the disc from its centre outward.
pub fn render_icon(size: u32) -> RgbaImage {
    let s = size as f32;
    let scale = s / MASTER_SIZE as f32;
    let corner = (s * 0.18).max(2.0);
    let cx = s * 0.5;
    let cy = s * 0.48;
    let r_sun = s * 0.26;
    let outline_w = (2.0 * scale).round().max(1.0);
    let ray_len = s * 0.4;

    // Ray triangles: apex at the disc centre, base chord at ray_len.
    let mut rays = [[(0.0f32, 0.0f32); 3]; RAY_COUNT];
    for (i, tri) in rays.iter_mut().enumerate() {
        let axis = (i * 45) as f32;
        let lo = (axis - RAY_HALF_WIDTH_DEG).to_radians();
        let hi = (axis + RAY_HALF_WIDTH_DEG).to_radians();
        *tri = [
            (cx, cy),
            (cx + ray_len * lo.cos(), cy - ray_len * lo.sin()),
            (cx + ray_len * hi.cos(), cy - ray_len * hi.sin()),
        ];
    }

    // New images start fully transparent
    let mut img = RgbaImage::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            // Outside the rounded rect stays transparent
            if !in_rounded_rect(px, py, s, corner) {
                continue;
            }

            let dx = px - cx;
            let dy = py - cy;
            let dist = (dx * dx + dy * dy).sqrt();

            let mut color = BACKGROUND;
            if dist <= r_sun {
                color = if dist >= r_sun - outline_w {
                    SUN_OUTLINE
                } else {
                    SUN_FILL
                };
            }
            // Rays are drawn last and overlap the disc
            if rays
                .iter()
                .any(|t| point_in_triangle(px, py, t[0], t[1], t[2]))
            {
                color = RAY_FILL;
            }

            img.put_pixel(x, y, Rgba(color));
        }
    }

    img
}

fn in_rounded_rect(px: f32, py: f32, side: f32, radius: f32) -> bool {
    if px < 0.0 || py < 0.0 || px > side || py > side {
        return false;
    }
    // Distance to the nearest corner circle centre, zero along the edges
    let qx = (radius - px).max(px - (side - radius)).max(0.0);
    let qy = (radius - py).max(py - (side - radius)).max(0.0);
    qx * qx + qy * qy <= radius * radius
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

fn point_in_triangle(px: f32, py: f32, p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}
