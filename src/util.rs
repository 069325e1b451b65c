use std::fmt::Write;

pub(crate) fn bin2string(bin: &[u8]) -> String {
    bin.iter().fold(String::new(), |mut output, x| {
        let _ = write!(output, "{x:08b} ");
        output
    })
}

pub mod test {
    use super::bin2string;
    use pretty_assertions::assert_eq;

    #[allow(clippy::missing_panics_doc)]
    pub fn assert_bytes_eq(l: &[u8], r: &[u8]) {
        assert_eq!(bin2string(l), bin2string(r));
    }

    /// flips bit `bit` (0 is the lowest) of the byte at `index`
    pub fn flip_bit(buffer: &[u8], index: usize, bit: u8) -> Vec<u8> {
        let mut flipped = buffer.to_vec();
        flipped[index] ^= 1 << bit;
        flipped
    }

    /// every single bit flip of `buffer`
    pub fn all_bit_flips(buffer: &[u8]) -> impl Iterator<Item = Vec<u8>> + '_ {
        (0..buffer.len())
            .flat_map(move |index| (0..8).map(move |bit| flip_bit(buffer, index, bit)))
    }
}
