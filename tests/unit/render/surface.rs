use super::*;

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

#[test]
fn accessors_are_bounds_checked() {
    let mut s = RenderSurface::new(canvas(3, 2)).unwrap();
    assert_eq!(s.get(2, 1), Some([0, 0, 0, 0]));
    assert_eq!(s.get(3, 0), None);
    assert_eq!(s.get(0, 2), None);
    assert!(s.set(1, 1, [1, 2, 3, 4]));
    assert!(!s.set(9, 9, [1, 2, 3, 4]));
    assert_eq!(s.get(1, 1), Some([1, 2, 3, 4]));
    assert_eq!(&s.data()[16..20], &[1, 2, 3, 4]);
}

#[test]
fn zero_sized_surface_is_a_surface_error() {
    let err = RenderSurface::new(canvas(0, 4)).unwrap_err();
    assert!(matches!(err, SynthError::Surface(_)));
}

#[test]
fn from_rgba8_checks_length() {
    assert!(RenderSurface::from_rgba8(2, 2, vec![0; 16]).is_ok());
    assert!(RenderSurface::from_rgba8(2, 2, vec![0; 15]).is_err());
}

#[test]
fn filled_sets_every_pixel() {
    let s = RenderSurface::filled(canvas(4, 4), [9, 8, 7, 255]).unwrap();
    assert!(s.data().chunks_exact(4).all(|px| px == [9, 8, 7, 255]));
}

#[test]
fn allocation_helpers_size_buffers() {
    assert_eq!(alloc_rgba8(3, 2).unwrap(), vec![0; 24]);
    assert_eq!(copy_bytes(&[1, 2, 3]).unwrap(), vec![1, 2, 3]);
}
