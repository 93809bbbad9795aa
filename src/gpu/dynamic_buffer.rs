//! Dynamic GPU buffer management with automatic resizing.
//!
//! Provides buffers that grow automatically when data exceeds capacity,
//! using a 2x growth strategy to minimize reallocations.

use wgpu::util::DeviceExt;

/// A GPU buffer that can grow dynamically.
///
/// Uses a 2x growth strategy when capacity is exceeded. Never shrinks
/// (GPU buffers cannot be resized in place).
pub struct DynamicBuffer {
    buffer: wgpu::Buffer,
    /// Capacity in bytes.
    capacity: usize,
    /// Current data length in bytes.
    len: usize,
    usage: wgpu::BufferUsages,
    label: String,
}

impl DynamicBuffer {
    /// Buffer with the given initial byte capacity.
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        initial_capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = initial_capacity.max(64);

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: capacity as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            capacity,
            len: 0,
            usage,
            label: label.to_owned(),
        }
    }

    /// Buffer initialized from existing data.
    pub fn new_with_data<T: bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        data: &[T],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let data_bytes: &[u8] = bytemuck::cast_slice(data);
        let capacity = data_bytes.len().max(64);

        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: data_bytes,
                usage: usage | wgpu::BufferUsages::COPY_DST,
            });

        Self {
            buffer,
            capacity,
            len: data_bytes.len(),
            usage,
            label: label.to_owned(),
        }
    }

    /// Write data to the buffer, growing if necessary.
    ///
    /// Returns `true` if the buffer was reallocated (bind groups need
    /// recreation).
    pub fn write<T: bytemuck::Pod>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let data_bytes: &[u8] = bytemuck::cast_slice(data);
        let needed = data_bytes.len();

        let reallocated = if needed > self.capacity {
            // 2x growth, minimum 1KB
            let new_capacity = (needed * 2).max(self.capacity + 1024);

            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&self.label),
                size: new_capacity as u64,
                usage: self.usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });

            self.capacity = new_capacity;
            true
        } else {
            false
        };

        if needed > 0 {
            queue.write_buffer(&self.buffer, 0, data_bytes);
        }
        self.len = needed;

        reallocated
    }

    /// The underlying GPU buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Current data length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when no data has been written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
