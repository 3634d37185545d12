use crate::ConvertError;

/// Plane layout of a YUV 4:2:0 camera frame.
///
/// Luma is addressed as `y[row * row_stride + col]`. Both chroma planes share
/// one geometry and are addressed as
/// `u[(row / 2) * chroma_row_stride + (col / 2) * pixel_stride]`, so every
/// 2x2 block of luma samples shares a single U/V pair. A pixel stride of 2
/// covers the interleaved (NV21/NV12) layout Android hands out for
/// `YUV_420_888` images, a stride of 1 the fully planar (I420) layout.
///
/// Luma rows are stepped by `row_stride`, not `width`, so any padding bytes
/// at the end of a row are skipped. For unpadded planes the two agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameGeometry {
    width: usize,
    height: usize,
    row_stride: usize,
    pixel_stride: usize,
    chroma_row_stride: usize,
}

impl FrameGeometry {
    /// Tightly packed planar geometry for a `width` x `height` frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            row_stride: width,
            pixel_stride: 1,
            chroma_row_stride: width.div_ceil(2),
        }
    }

    /// Set the luma row stride in bytes.
    pub fn with_row_stride(mut self, row_stride: usize) -> Self {
        self.row_stride = row_stride;
        self
    }

    /// Set the byte distance between consecutive chroma samples in a row.
    pub fn with_pixel_stride(mut self, pixel_stride: usize) -> Self {
        self.pixel_stride = pixel_stride;
        self
    }

    /// Set the chroma row stride in bytes.
    pub fn with_chroma_row_stride(mut self, chroma_row_stride: usize) -> Self {
        self.chroma_row_stride = chroma_row_stride;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn pixel_stride(&self) -> usize {
        self.pixel_stride
    }

    pub fn chroma_row_stride(&self) -> usize {
        self.chroma_row_stride
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Minimum luma plane length for this geometry.
    pub fn luma_len(&self) -> Option<usize> {
        let last_col = self.width.checked_sub(1)?;
        self.height
            .checked_sub(1)?
            .checked_mul(self.row_stride)?
            .checked_add(last_col)?
            .checked_add(1)
    }

    /// Minimum length of each chroma plane for this geometry.
    ///
    /// The last chroma row only needs to reach the last addressed sample,
    /// which is why Android may deliver interleaved planes one byte short of
    /// `rows * chroma_row_stride`.
    pub fn chroma_len(&self) -> Option<usize> {
        let last_row = self.height.checked_sub(1)? / 2;
        last_row
            .checked_mul(self.chroma_row_stride)?
            .checked_add(self.chroma_row_span()?)
    }

    fn chroma_row_span(&self) -> Option<usize> {
        (self.width.checked_sub(1)? / 2)
            .checked_mul(self.pixel_stride)?
            .checked_add(1)
    }

    /// Check the geometry and the plane lengths that go with it.
    pub fn validate(&self, y_len: usize, u_len: usize, v_len: usize) -> Result<(), ConvertError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertError::InvalidGeometry(format!(
                "frame size {}x{} is empty",
                self.width, self.height
            )));
        }
        if self.row_stride == 0 || self.pixel_stride == 0 || self.chroma_row_stride == 0 {
            return Err(ConvertError::InvalidGeometry(format!(
                "strides must be positive (row {}, pixel {}, chroma row {})",
                self.row_stride, self.pixel_stride, self.chroma_row_stride
            )));
        }
        if !matches!(self.pixel_stride, 1 | 2) {
            return Err(ConvertError::UnsupportedPixelStride(self.pixel_stride));
        }
        if self.row_stride < self.width {
            return Err(ConvertError::InvalidGeometry(format!(
                "row stride {} is smaller than width {}",
                self.row_stride, self.width
            )));
        }
        let overflow = || ConvertError::InvalidGeometry("plane size overflows".to_string());
        let span = self.chroma_row_span().ok_or_else(overflow)?;
        if self.chroma_row_stride < span {
            return Err(ConvertError::InvalidGeometry(format!(
                "chroma row stride {} is smaller than the {} bytes a chroma row spans",
                self.chroma_row_stride, span
            )));
        }
        let luma_len = self.luma_len().ok_or_else(overflow)?;
        if y_len < luma_len {
            return Err(ConvertError::InvalidGeometry(format!(
                "Y plane has {y_len} bytes, {luma_len} required"
            )));
        }
        let chroma_len = self.chroma_len().ok_or_else(overflow)?;
        for (name, len) in [("U", u_len), ("V", v_len)] {
            if len < chroma_len {
                return Err(ConvertError::InvalidGeometry(format!(
                    "{name} plane has {len} bytes, {chroma_len} required"
                )));
            }
        }
        Ok(())
    }
}

fn overflow(width: usize, height: usize) -> ConvertError {
    ConvertError::InvalidGeometry(format!("frame size {width}x{height} overflows"))
}

fn packed_len(width: usize, height: usize) -> Result<usize, ConvertError> {
    width
        .checked_mul(height)
        .ok_or_else(|| overflow(width, height))
}

/// A camera frame borrowed from the caller for the duration of one conversion.
#[derive(Clone, Copy, Debug)]
pub struct YuvFrame<'a> {
    pub y: &'a [u8],
    pub u: &'a [u8],
    pub v: &'a [u8],
    pub geometry: FrameGeometry,
}

impl<'a> YuvFrame<'a> {
    pub fn new(y: &'a [u8], u: &'a [u8], v: &'a [u8], geometry: FrameGeometry) -> Self {
        Self { y, u, v, geometry }
    }

    /// Split a tightly packed I420 buffer (Y, then U, then V).
    pub fn from_i420(data: &'a [u8], width: usize, height: usize) -> Result<Self, ConvertError> {
        let geometry = FrameGeometry::new(width, height);
        let y_len = packed_len(width, height)?;
        let chroma_len = packed_len(width.div_ceil(2), height.div_ceil(2))?;
        let expected = packed_len(chroma_len, 2)?
            .checked_add(y_len)
            .ok_or_else(|| overflow(width, height))?;
        if data.len() < expected {
            return Err(ConvertError::InvalidGeometry(format!(
                "I420 buffer has {} bytes, {} required for {}x{}",
                data.len(),
                expected,
                width,
                height
            )));
        }
        let (y, chroma) = data.split_at(y_len);
        let (u, v) = chroma.split_at(chroma_len);
        let frame = Self::new(y, u, &v[..chroma_len], geometry);
        frame.validate()?;
        Ok(frame)
    }

    /// Split a tightly packed NV21 buffer (Y, then interleaved V/U pairs).
    pub fn from_nv21(data: &'a [u8], width: usize, height: usize) -> Result<Self, ConvertError> {
        let chroma_row_stride = width.div_ceil(2) * 2;
        let geometry = FrameGeometry::new(width, height)
            .with_pixel_stride(2)
            .with_chroma_row_stride(chroma_row_stride);
        let y_len = packed_len(width, height)?;
        let expected = packed_len(chroma_row_stride, height.div_ceil(2))?
            .checked_add(y_len)
            .ok_or_else(|| overflow(width, height))?;
        if data.len() < expected {
            return Err(ConvertError::InvalidGeometry(format!(
                "NV21 buffer has {} bytes, {} required for {}x{}",
                data.len(),
                expected,
                width,
                height
            )));
        }
        let (y, vu) = data.split_at(y_len);
        let u = vu.get(1..).unwrap_or_default();
        let frame = Self::new(y, u, vu, geometry);
        frame.validate()?;
        Ok(frame)
    }

    pub fn width(&self) -> usize {
        self.geometry.width()
    }

    pub fn height(&self) -> usize {
        self.geometry.height()
    }

    pub fn validate(&self) -> Result<(), ConvertError> {
        self.geometry
            .validate(self.y.len(), self.u.len(), self.v.len())
    }

    /// Luma and chroma samples for the pixel at `(row, col)`.
    ///
    /// Callers must have validated the frame first.
    #[inline]
    pub(crate) fn sample(&self, row: usize, col: usize) -> (u8, u8, u8) {
        let g = &self.geometry;
        let chroma = (row / 2) * g.chroma_row_stride + (col / 2) * g.pixel_stride;
        (self.y[row * g.row_stride + col], self.u[chroma], self.v[chroma])
    }
}
