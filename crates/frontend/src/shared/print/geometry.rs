//! Арифметика печатной страницы: сколько пикселей в миллиметре и
//! помещается ли содержимое на один лист.

/// Маркер компактной вёрстки на `<body>`
pub const COMPACT_CLASS: &str = "print-compact";

/// Высота измерительного блока
pub const RULER_HEIGHT_MM: f64 = 100.0;

/// CSS reference pixel density, used when the ruler cannot be measured.
pub const CSS_PX_PER_MM: f64 = 96.0 / 25.4;

/// Размер листа и поля, которые съедает принтер
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub height_mm: f64,
    pub reserved_mm: f64,
}

impl PageGeometry {
    pub const A4: PageGeometry = PageGeometry {
        height_mm: 297.0,
        reserved_mm: 20.0,
    };

    /// Доступная высота содержимого в пикселях
    pub fn available_px(&self, px_per_mm: f64) -> f64 {
        (self.height_mm - self.reserved_mm) * px_per_mm
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

/// Плотность по измеренной высоте блока в `RULER_HEIGHT_MM` миллиметров
pub fn px_per_mm(ruler_height_px: f64) -> f64 {
    let ratio = ruler_height_px / RULER_HEIGHT_MM;
    // NaN also lands here
    if ratio > 0.0 {
        ratio
    } else {
        CSS_PX_PER_MM
    }
}

pub fn needs_compaction(content_px: f64, px_per_mm: f64, page: PageGeometry) -> bool {
    content_px > page.available_px(px_per_mm)
}
