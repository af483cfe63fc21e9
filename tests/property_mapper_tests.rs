use plotxy::core::{AxisRange, CanvasSize, CoordinateMapper, PlotLayout};
use proptest::prelude::*;

fn fitted_mapper(
    width: u32,
    height: u32,
    x_range: AxisRange,
    y_range: AxisRange,
    equal_scale: bool,
) -> CoordinateMapper {
    let layout = PlotLayout::default().with_canvas(CanvasSize::new(width, height));
    let mut mapper = CoordinateMapper::new(layout);
    mapper
        .recompute_scale(x_range, y_range, equal_scale)
        .expect("valid ranges");
    mapper
}

proptest! {
    #[test]
    fn screen_to_real_to_screen_is_identity(
        width in 200u32..2_000,
        height in 200u32..1_500,
        x_min in -1.0e3f64..1.0e3,
        x_span in 1.0e-2f64..1.0e4,
        y_min in -1.0e3f64..1.0e3,
        y_span in 1.0e-2f64..1.0e4,
        fx in 0.0f64..=1.0,
        fy in 0.0f64..=1.0
    ) {
        let mapper = fitted_mapper(
            width,
            height,
            AxisRange::new(x_min, x_min + x_span),
            AxisRange::new(y_min, y_min + y_span),
            false,
        );
        let layout = mapper.layout();
        let sx = (layout.data_origin_x() + fx * layout.usable_width()).trunc();
        let sy = (layout.data_origin_y() + fy * layout.usable_height()).trunc();

        prop_assert_eq!(f64::from(mapper.to_screen_x(mapper.to_real_x(sx))), sx);
        prop_assert_eq!(f64::from(mapper.to_screen_y(mapper.to_real_y(sy))), sy);
    }

    #[test]
    fn real_to_screen_to_real_is_within_one_pixel(
        x_min in -1.0e4f64..1.0e4,
        x_span in 1.0e-2f64..1.0e4,
        y_min in -1.0e4f64..1.0e4,
        y_span in 1.0e-2f64..1.0e4,
        fx in 0.0f64..=1.0,
        fy in 0.0f64..=1.0,
        equal_scale in any::<bool>()
    ) {
        let mapper = fitted_mapper(
            800,
            600,
            AxisRange::new(x_min, x_min + x_span),
            AxisRange::new(y_min, y_min + y_span),
            equal_scale,
        );
        let scale = mapper.scale();
        let x = x_min + fx * x_span;
        let y = y_min + fy * y_span;

        let x_back = mapper.to_real_x(f64::from(mapper.to_screen_x(x)));
        let y_back = mapper.to_real_y(f64::from(mapper.to_screen_y(y)));
        prop_assert!((x_back - x).abs() <= 1.0 / scale.sfx + 1e-9 * x_span.max(1.0));
        prop_assert!((y_back - y).abs() <= 1.0 / scale.sfy + 1e-9 * y_span.max(1.0));
    }

    #[test]
    fn data_range_stays_inside_plot_area(
        x_min in -1.0e4f64..1.0e4,
        x_span in 1.0e-2f64..1.0e4,
        y_min in -1.0e4f64..1.0e4,
        y_span in 1.0e-2f64..1.0e4,
        fx in 0.0f64..=1.0,
        fy in 0.0f64..=1.0
    ) {
        let mapper = fitted_mapper(
            800,
            600,
            AxisRange::new(x_min, x_min + x_span),
            AxisRange::new(y_min, y_min + y_span),
            false,
        );
        let area = mapper.layout().plot_area();
        let (sx, sy) = mapper.to_screen(x_min + fx * x_span, y_min + fy * y_span);
        prop_assert!(area.contains(f64::from(sx), f64::from(sy)));
    }
}
