#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CType {
    Bool(u8),
    Int(u8, bool),
    Float(u8),
}

impl CType {
    pub fn sizeof(&self) -> u32 {
        match self {
            CType::Bool(s) | CType::Int(s, _) | CType::Float(s) => *s as u32,
        }
    }

    /**
     * Width of an object of this type, in bits.
     */
    pub fn bits(&self, char_bit: u32) -> u32 {
        self.sizeof() * char_bit
    }

    /**
     * Do the integer type promotion.
     *
     * Every type narrower than `int` fits into a signed `int`, which is where a
     * macro like `UCHAR_MAX` gets its type from.
     */
    pub fn promote(self, int_size: u8) -> Self {
        match self {
            CType::Int(size, _) if size < int_size => CType::Int(int_size, true),
            CType::Bool(_) => CType::Int(int_size, true),
            x => x,
        }
    }

    /**
     * Smallest value of an integer type, assuming two's complement.
     */
    pub fn int_min(&self, char_bit: u32) -> Option<i128> {
        match self {
            CType::Int(_, true) => Some(i128::MIN >> (128 - self.bits(char_bit))),
            CType::Int(_, false) | CType::Bool(_) => Some(0),
            CType::Float(_) => None,
        }
    }

    pub fn int_max(&self, char_bit: u32) -> Option<u128> {
        let bits = self.bits(char_bit);
        match self {
            CType::Int(_, true) => Some((i128::MAX >> (128 - bits)) as u128),
            CType::Int(_, false) => Some(u128::MAX >> (128 - bits)),
            CType::Bool(_) => Some(1),
            CType::Float(_) => None,
        }
    }
}
