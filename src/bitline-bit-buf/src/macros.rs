// Method families shared by the stream types.
//
// Every type using these must have `data`, `cursor` and `endian`
// fields. Types using `impl_write_ops!` additionally provide an
// `after_write` hook that runs after every completed scalar write.

macro_rules! impl_queries {
    () => {
        /// Gets the byte order used for full-width scalars.
        #[inline]
        pub fn endian(&self) -> $crate::Endian {
            self.endian
        }

        /// Gets the number of bits left in the buffer.
        #[inline]
        pub fn available_bits(&self) -> usize {
            self.cursor.available_bits()
        }

        /// Gets how many more `T` values at their natural width fit
        /// into the remaining bits.
        #[inline]
        pub fn available<T: $crate::Primitive>(&self) -> usize {
            self.available_for(T::BITS as usize)
        }

        /// Gets how many more `nbits` wide fields fit into the
        /// remaining bits.
        ///
        /// # Panics
        ///
        /// Panics when `nbits` is zero.
        #[inline]
        pub fn available_for(&self, nbits: usize) -> usize {
            self.cursor.available_bits() / nbits
        }

        /// Gets the lifecycle state of the stream.
        #[inline]
        pub fn state(&self) -> $crate::StreamState {
            self.cursor.state()
        }

        /// Indicates whether every bit of the buffer was used.
        #[inline]
        pub fn at_end(&self) -> bool {
            self.cursor.available_bits() == 0
        }

        /// Rewinds the stream to the start of its buffer.
        #[inline]
        pub fn restart(&mut self) {
            self.cursor.reset();
        }
    };
}

macro_rules! impl_read_ops {
    () => {
        /// Reads a `T` at its natural width, if enough bits are left.
        ///
        /// Integers wider than a byte and floating-point values are
        /// assembled from whole bytes in the stream's [`Endian`] order.
        ///
        /// [`Endian`]: crate::Endian
        #[inline]
        pub fn read<T: $crate::Primitive>(&mut self) -> Option<T> {
            if self.cursor.available_bits() < T::BITS as usize {
                bitline_utils::hints::cold_path();
                return None;
            }

            Some(self.read_unchecked())
        }

        /// Reads a `T` at its natural width without checking capacity.
        ///
        /// This is an escape hatch for hot paths where the caller has
        /// already verified [`Self::available_bits`]; prefer
        /// [`Self::read`] otherwise.
        ///
        /// # Panics
        ///
        /// Panics when the buffer does not hold enough bits. The stream
        /// position is unspecified afterwards.
        #[inline]
        pub fn read_unchecked<T: $crate::Primitive>(&mut self) -> T {
            $crate::codec::read_primitive(&*self.data, &mut self.cursor, self.endian)
        }

        /// Reads an `nbits` wide field into a `T`, if enough bits are left.
        ///
        /// For signed `T` narrower fields are sign-extended from their
        /// top bit. A field of the full width of `T` behaves like
        /// [`Self::read`].
        ///
        /// # Panics
        ///
        /// Panics when `nbits` is zero or exceeds the width of `T`.
        #[inline]
        #[track_caller]
        pub fn read_bits<T: $crate::Integral>(&mut self, nbits: u32) -> Option<T> {
            $crate::primitive::check_width::<T>(nbits);

            if self.cursor.available_bits() < nbits as usize {
                bitline_utils::hints::cold_path();
                return None;
            }

            Some($crate::codec::read_integral(
                &*self.data,
                &mut self.cursor,
                self.endian,
                nbits,
            ))
        }

        /// Reads an `nbits` wide field into a `T` without checking capacity.
        ///
        /// # Panics
        ///
        /// Panics when `nbits` is zero or exceeds the width of `T`, and
        /// when the buffer does not hold enough bits.
        #[inline]
        #[track_caller]
        pub fn read_bits_unchecked<T: $crate::Integral>(&mut self, nbits: u32) -> T {
            $crate::primitive::check_width::<T>(nbits);
            $crate::codec::read_integral(&*self.data, &mut self.cursor, self.endian, nbits)
        }

        /// Reads an `N` bit wide field into a `T`, if enough bits are left.
        ///
        /// Unlike [`Self::read_bits`], an out-of-range `N` is rejected
        /// at compile time.
        #[inline]
        pub fn read_fixed<T: $crate::Integral, const N: u32>(&mut self) -> Option<T> {
            let nbits = $crate::primitive::Width::<T, N>::CHECKED;

            if self.cursor.available_bits() < nbits as usize {
                bitline_utils::hints::cold_path();
                return None;
            }

            Some($crate::codec::read_integral(
                &*self.data,
                &mut self.cursor,
                self.endian,
                nbits,
            ))
        }

        /// Reads an `N` bit wide field into a `T` without checking capacity.
        ///
        /// # Panics
        ///
        /// Panics when the buffer does not hold enough bits.
        #[inline]
        pub fn read_fixed_unchecked<T: $crate::Integral, const N: u32>(&mut self) -> T {
            let nbits = $crate::primitive::Width::<T, N>::CHECKED;
            $crate::codec::read_integral(&*self.data, &mut self.cursor, self.endian, nbits)
        }
    };
}

macro_rules! impl_write_ops {
    () => {
        /// Writes a `T` at its natural width, if enough bits are left.
        ///
        /// Integers wider than a byte and floating-point values are
        /// split into whole bytes in the stream's [`Endian`] order.
        ///
        /// Returns `false` without touching the buffer otherwise.
        ///
        /// [`Endian`]: crate::Endian
        #[inline]
        pub fn write<T: $crate::Primitive>(&mut self, value: T) -> bool {
            if self.cursor.available_bits() < T::BITS as usize {
                bitline_utils::hints::cold_path();
                return false;
            }

            self.write_unchecked(value);
            true
        }

        /// Writes a `T` at its natural width without checking capacity.
        ///
        /// This is an escape hatch for hot paths where the caller has
        /// already verified [`Self::available_bits`]; prefer
        /// [`Self::write`] otherwise.
        ///
        /// # Panics
        ///
        /// Panics when the buffer does not have room for the value. The
        /// stream position is unspecified afterwards.
        #[inline]
        pub fn write_unchecked<T: $crate::Primitive>(&mut self, value: T) {
            $crate::codec::write_primitive(&mut *self.data, &mut self.cursor, self.endian, value);
            self.after_write();
        }

        /// Writes the low `nbits` bits of `value`, if enough bits are left.
        ///
        /// Bits of `value` above `nbits` are silently discarded, so
        /// values that do not fit the field are truncated rather than
        /// rejected. A field of the full width of `T` behaves like
        /// [`Self::write`].
        ///
        /// Returns `false` without touching the buffer when there is
        /// not enough room.
        ///
        /// # Panics
        ///
        /// Panics when `nbits` is zero or exceeds the width of `T`.
        #[inline]
        #[track_caller]
        pub fn write_bits<T: $crate::Integral>(&mut self, value: T, nbits: u32) -> bool {
            $crate::primitive::check_width::<T>(nbits);

            if self.cursor.available_bits() < nbits as usize {
                bitline_utils::hints::cold_path();
                return false;
            }

            $crate::codec::write_integral(
                &mut *self.data,
                &mut self.cursor,
                self.endian,
                value,
                nbits,
            );
            self.after_write();

            true
        }

        /// Writes the low `nbits` bits of `value` without checking capacity.
        ///
        /// # Panics
        ///
        /// Panics when `nbits` is zero or exceeds the width of `T`, and
        /// when the buffer does not have room for the field.
        #[inline]
        #[track_caller]
        pub fn write_bits_unchecked<T: $crate::Integral>(&mut self, value: T, nbits: u32) {
            $crate::primitive::check_width::<T>(nbits);

            $crate::codec::write_integral(
                &mut *self.data,
                &mut self.cursor,
                self.endian,
                value,
                nbits,
            );
            self.after_write();
        }

        /// Writes the low `N` bits of `value`, if enough bits are left.
        ///
        /// Unlike [`Self::write_bits`], an out-of-range `N` is rejected
        /// at compile time.
        #[inline]
        pub fn write_fixed<T: $crate::Integral, const N: u32>(&mut self, value: T) -> bool {
            let nbits = $crate::primitive::Width::<T, N>::CHECKED;

            if self.cursor.available_bits() < nbits as usize {
                bitline_utils::hints::cold_path();
                return false;
            }

            $crate::codec::write_integral(
                &mut *self.data,
                &mut self.cursor,
                self.endian,
                value,
                nbits,
            );
            self.after_write();

            true
        }

        /// Writes the low `N` bits of `value` without checking capacity.
        ///
        /// # Panics
        ///
        /// Panics when the buffer does not have room for the field.
        #[inline]
        pub fn write_fixed_unchecked<T: $crate::Integral, const N: u32>(&mut self, value: T) {
            let nbits = $crate::primitive::Width::<T, N>::CHECKED;

            $crate::codec::write_integral(
                &mut *self.data,
                &mut self.cursor,
                self.endian,
                value,
                nbits,
            );
            self.after_write();
        }
    };
}
