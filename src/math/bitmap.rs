// Copyright 2020 @TwoCookingMice

use std::ops;
use std::vec::Vec;

/// Single channel, row-major float image.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    data: Vec<f32>,
    height: usize,
    width: usize
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = f32;

    fn index(&self, index: (usize, usize)) -> &f32 {
        assert!(index.0 < self.width && index.1 < self.height);
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f32 {
        assert!(index.0 < self.width && index.1 < self.height);
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self { data: vec![0.0; width * height],
               width,
               height }
    }

    pub fn from_data(width: usize, height: usize, data: Vec<f32>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self { data, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Copy a `w` x `h` row-major block into the image at (x0, y0).
    pub fn blit(&mut self, x0: usize, y0: usize, w: usize, h: usize, block: &[f32]) {
        assert_eq!(block.len(), w * h);
        assert!(x0 + w <= self.width && y0 + h <= self.height);
        for row in 0..h {
            let dst = x0 + self.width * (y0 + row);
            self.data[dst..dst + w].copy_from_slice(&block[row * w..(row + 1) * w]);
        }
    }
}

/* Test for Bitmap */
