use {
  super::*,
  image::Luma
};

fn square_outline(size: u32, from: u32, to: u32) -> GrayImage {
  let mut edges = GrayImage::new(size, size);
  for i in from..=to {
    edges.put_pixel(i, from, Luma([255]));
    edges.put_pixel(i, to, Luma([255]));
    edges.put_pixel(from, i, Luma([255]));
    edges.put_pixel(to, i, Luma([255]));
  }
  edges
}

#[test] fn keep_count_boundaries() {
  // realistic floor
  assert_eq!(keep_count(200, 0.1, 10), 20);
  assert_eq!(keep_count(200, 1.0, 10), 200);
  assert_eq!(keep_count(40, 0.1, 10), 10);
  // contour floor
  assert_eq!(keep_count(200, 0.1, 5), 20);
  assert_eq!(keep_count(30, 0.1, 5), 5);
  assert_eq!(keep_count(30, 1.0, 5), 30);
  // never more than available
  assert_eq!(keep_count(3, 0.1, 10), 3);
  assert_eq!(keep_count(0, 1.0, 5), 0);
}

#[test] fn shoelace_area() {
  let square = Contour::new(vec![
    P2::new(0, 0), P2::new(10, 0), P2::new(10, 10), P2::new(0, 10)
  ]);
  assert_eq!(square.area(), 100.0);
  assert_eq!(Contour::new(vec![P2::new(0, 0), P2::new(5, 5)]).area(), 0.0);
}

#[test] fn compress_straight_runs() {
  let run: Vec<_> = (0..6).map(|x| P2::new(x, 0))
    .chain((1..4).map(|y| P2::new(5, y)))
    .collect();
  assert_eq!(compress_chain(&run), vec![P2::new(0, 0), P2::new(5, 0), P2::new(5, 3)]);
  let short = vec![P2::new(0, 0), P2::new(1, 1)];
  assert_eq!(compress_chain(&short), short);
}

#[test] fn sort_largest_first() {
  let small = Contour::new(vec![P2::new(0, 0), P2::new(2, 0), P2::new(2, 2), P2::new(0, 2)]);
  let large = Contour::new(vec![P2::new(0, 0), P2::new(9, 0), P2::new(9, 9), P2::new(0, 9)]);
  let line = Contour::new(vec![P2::new(0, 0), P2::new(4, 4)]);
  let sorted = sort_by_area(vec![small.clone(), line.clone(), large.clone()]);
  assert_eq!(sorted, vec![large, small, line]);
}

#[test] fn blank_image_has_no_edges() {
  let gray = GrayImage::from_pixel(64, 64, Luma([255]));
  let edges = detect_edges(&gaussian(&gray, 1.1), 30.0, 100.0);
  assert!(edges.pixels().all(|p| p.0[0] == 0));
  assert!(find_contours(&edges, Retrieval::List).is_empty());
}

#[test] fn outline_produces_contours() {
  let edges = square_outline(32, 8, 23);
  let all = find_contours(&edges, Retrieval::List);
  let external = find_contours(&edges, Retrieval::External);
  assert!(!external.is_empty());
  assert!(all.len() >= external.len());
  // a square outline compresses down to its corners
  assert!(external[0].len() <= 8);
  assert!(external[0].area() > 200.0);
}

#[test] fn simplify_keeps_corners() {
  let edges = square_outline(32, 4, 27);
  let outer = &find_contours(&edges, Retrieval::External)[0];
  let simplified = outer.simplify(0.01 * outer.perimeter());
  assert!(simplified.len() >= 3 && simplified.len() <= outer.len());
  assert!((outer.perimeter() - 92.0).abs() < 1.0);
}

#[test] fn uniform_region_mean() {
  let source = SourceImage::from(RgbImage::from_pixel(20, 10, Rgb([12, 200, 77])));
  assert_eq!(source.region_mean(P2::new(3, 2), 8, 8), Some(Rgb([12, 200, 77])));
  // clipped at the border
  assert_eq!(source.region_mean(P2::new(15, 5), 30, 30), Some(Rgb([12, 200, 77])));
  assert_eq!(source.region_mean(P2::new(25, 5), 3, 3), None);
}

#[test] fn region_mean_averages() {
  let mut image = RgbImage::from_pixel(2, 1, Rgb([0, 0, 0]));
  image.put_pixel(1, 0, Rgb([100, 50, 255]));
  let source = SourceImage::from(image);
  assert_eq!(source.region_mean(P2::new(0, 0), 2, 1), Some(Rgb([50, 25, 127])));
}

#[test] fn grayscale_source() {
  let source = SourceImage::from(GrayImage::from_pixel(4, 4, Luma([90])));
  assert!(source.is_grayscale());
  assert_eq!(source.color_at(P2::new(1, 1)), Rgb([90, 90, 90]));
  assert_eq!(source.gray_at(P2::new(1, 1)), 90);
}
