use {
  super::*,
  crate::geometry::{P2, BLACK, BBox},
  image::Rgb
};

const RED: Rgb<u8> = Rgb([255, 0, 0]);

fn canvas(w: u32, h: u32) -> Canvas {
  Canvas::new(Dimensions::new(w, h), WHITE)
}

fn painted(canvas: &Canvas) -> usize {
  canvas.image().pixels().filter(|p| **p != canvas.background()).count()
}

#[test] fn reset_fills_background() {
  let canvas = Canvas::new(Dimensions::new(7, 5), Rgb([10, 20, 30]));
  assert_eq!(canvas.dimensions(), Dimensions::new(7, 5));
  assert!(canvas.image().pixels().all(|p| *p == Rgb([10, 20, 30])));
  assert!(canvas.is_blank());
}

#[test] fn clear_restores_fresh_buffer() {
  let mut canvas = canvas(32, 16);
  canvas.apply(&Primitive::segment(P2::new(0, 0), P2::new(31, 15), BLACK, 3));
  canvas.apply(&Primitive::dot(P2::new(10, 10), 3, RED));
  assert!(!canvas.is_blank());

  canvas.clear();
  assert_eq!(canvas.snapshot(), Canvas::new(Dimensions::new(32, 16), WHITE).snapshot());
}

#[test] fn horizontal_line_covers_both_ends() {
  let mut canvas = canvas(10, 3);
  canvas.apply(&Primitive::segment(P2::new(2, 1), P2::new(6, 1), BLACK, 1));
  (2..=6).for_each(|x| assert_eq!(*canvas.image().get_pixel(x, 1), BLACK));
  assert_eq!(painted(&canvas), 5);
}

#[test] fn bresenham_diagonal() {
  let points: Vec<_> = raster::Bresenham::new(P2::new(0, 0), P2::new(3, 3)).collect();
  assert_eq!(points, vec![P2::new(0, 0), P2::new(1, 1), P2::new(2, 2), P2::new(3, 3)]);
  let single: Vec<_> = raster::Bresenham::new(P2::new(4, 2), P2::new(4, 2)).collect();
  assert_eq!(single, vec![P2::new(4, 2)]);
}

#[test] fn out_of_bounds_is_ignored() {
  let mut canvas = canvas(8, 8);
  canvas.apply(&Primitive::segment(P2::new(-50, -50), P2::new(-10, -3), BLACK, 2));
  canvas.apply(&Primitive::dot(P2::new(100, 100), 3, RED));
  canvas.apply(&Primitive::Polygon {
    points: vec![P2::new(20, 20), P2::new(30, 20), P2::new(25, 30)],
    fill: RED
  });
  assert!(canvas.is_blank());

  // partially visible primitives are clipped, not dropped
  canvas.apply(&Primitive::segment(P2::new(-4, 3), P2::new(4, 3), BLACK, 1));
  assert_eq!(painted(&canvas), 5);
}

#[test] fn wide_line_is_thicker() {
  let mut thin = canvas(20, 20);
  let mut wide = canvas(20, 20);
  thin.apply(&Primitive::segment(P2::new(2, 10), P2::new(17, 10), BLACK, 1));
  wide.apply(&Primitive::segment(P2::new(2, 10), P2::new(17, 10), BLACK, 2));
  assert!(painted(&wide) > painted(&thin));
  assert_eq!(*wide.image().get_pixel(10, 9), BLACK);
  assert_eq!(*wide.image().get_pixel(10, 11), BLACK);
}

#[test] fn filled_dot() {
  let mut canvas = canvas(9, 9);
  canvas.apply(&Primitive::dot(P2::new(4, 4), 1, RED));
  // radius 1 covers the whole 3x3 box
  itertools::iproduct!(3..=5, 3..=5)
    .for_each(|(y, x)| assert_eq!(*canvas.image().get_pixel(x, y), RED));
  assert_eq!(painted(&canvas), 9);
}

#[test] fn ring_keeps_center_untouched() {
  let mut canvas = canvas(41, 41);
  canvas.apply(&Primitive::ring(P2::new(20, 20), 10, RED, 2));
  assert_eq!(*canvas.image().get_pixel(20, 20), WHITE);
  assert_eq!(*canvas.image().get_pixel(20, 10), RED);
  assert_eq!(*canvas.image().get_pixel(30, 20), RED);
  assert_eq!(*canvas.image().get_pixel(20, 5), WHITE);
}

#[test] fn ellipse_outline_over_fill() {
  let mut canvas = canvas(21, 21);
  canvas.apply(&Primitive::Ellipse {
    bbox: BBox::new(P2::new(0, 0), P2::new(20, 20)),
    fill: Some(RED),
    outline: Some(BLACK),
    width: 1
  });
  assert_eq!(*canvas.image().get_pixel(10, 10), RED);
  assert_eq!(*canvas.image().get_pixel(10, 0), BLACK);
}

#[test] fn polygon_fill() {
  let mut canvas = canvas(12, 12);
  canvas.apply(&Primitive::Polygon {
    points: vec![P2::new(1, 1), P2::new(10, 1), P2::new(10, 10), P2::new(1, 10)],
    fill: RED
  });
  assert_eq!(painted(&canvas), 100);
  assert_eq!(*canvas.image().get_pixel(5, 5), RED);
  assert_eq!(*canvas.image().get_pixel(0, 0), WHITE);
  assert_eq!(*canvas.image().get_pixel(11, 11), WHITE);
}

#[test] fn degenerate_polygon_still_paints() {
  let mut canvas = canvas(12, 12);
  canvas.apply(&Primitive::Polygon {
    points: vec![P2::new(2, 2), P2::new(8, 2), P2::new(5, 2)],
    fill: RED
  });
  assert_eq!(painted(&canvas), 7);
}

#[test] fn recorder_keeps_order() {
  let mut recorded: Vec<Primitive> = vec![];
  let a = Primitive::dot(P2::new(1, 1), 1, RED);
  let b = Primitive::segment(P2::new(0, 0), P2::new(1, 1), BLACK, 1);
  recorded.apply(&a);
  recorded.apply(&b);
  assert_eq!(recorded, vec![a, b]);
}

#[test] fn shared_canvas_snapshot() {
  let mut shared = SharedCanvas::new(canvas(4, 4));
  shared.apply(&Primitive::segment(P2::new(0, 0), P2::new(3, 0), BLACK, 1));
  let snapshot = shared.snapshot();
  assert_eq!(*snapshot.get_pixel(3, 0), BLACK);
  assert_eq!(*snapshot.get_pixel(3, 3), WHITE);
}
