//! Record: the 32-byte unit of the tile accelerator's input stream.
//!
//! Headers and vertices share one fixed-size layout so a record can be pushed
//! through a store queue in a single burst. The first word tells them apart.

use tagl_hal::BURST_WORDS;

/// Command word of a mid-strip vertex.
pub const CMD_VERTEX: u32 = 0xE000_0000;
/// Command word of the last vertex of a strip.
pub const CMD_VERTEX_EOL: u32 = 0xF000_0000;
/// Command word of a default polygon header.
pub const CMD_HEADER: u32 = 0x8084_0000;

/// Decoded command of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Polygon context. Any command word that is not a vertex sentinel.
    Header,
    /// Vertex that continues the current strip.
    Vertex,
    /// Vertex that terminates the current strip.
    VertexEol,
}

impl Command {
    /// Classify a raw command word.
    pub fn from_word(word: u32) -> Self {
        match word {
            CMD_VERTEX => Command::Vertex,
            CMD_VERTEX_EOL => Command::VertexEol,
            _ => Command::Header,
        }
    }

    /// Command word for a vertex record. Headers keep their own word.
    pub fn vertex_word(last: bool) -> u32 {
        if last {
            CMD_VERTEX_EOL
        } else {
            CMD_VERTEX
        }
    }
}

/// One header or vertex record.
///
/// For vertices, `xyz`/`w` are in the space of the current stage: clip space
/// on input, screen space (x, y in pixels, z = depth) on output, with `w`
/// retained. For headers, every field after `flags` is opaque payload.
#[repr(C, align(32))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Record {
    pub flags: u32,
    pub xyz: [f32; 3],
    pub uv: [f32; 2],
    pub w: f32,
    /// Packed color, hardware channel order B, G, R, A.
    pub bgra: [u8; 4],
}

const _: () = assert!(core::mem::size_of::<Record>() == BURST_WORDS * 4);

impl Record {
    /// Build a default polygon header carrying `payload` verbatim.
    pub fn header(payload: [u32; BURST_WORDS - 1]) -> Self {
        let mut words = [0u32; BURST_WORDS];
        words[0] = CMD_HEADER;
        words[1..].copy_from_slice(&payload);
        Self::from_words(&words)
    }

    /// Build a mid-strip vertex.
    pub fn vertex(xyz: [f32; 3], w: f32, uv: [f32; 2], bgra: [u8; 4]) -> Self {
        Self {
            flags: CMD_VERTEX,
            xyz,
            uv,
            w,
            bgra,
        }
    }

    /// Decode the command word.
    pub fn command(&self) -> Command {
        Command::from_word(self.flags)
    }

    pub fn is_vertex(&self) -> bool {
        self.command() != Command::Header
    }

    /// True for a vertex that terminates its strip.
    pub fn is_last(&self) -> bool {
        self.flags == CMD_VERTEX_EOL
    }

    /// Copy of this vertex re-flagged as mid-strip or end-of-strip.
    pub fn with_last(mut self, last: bool) -> Self {
        self.flags = Command::vertex_word(last);
        self
    }

    /// Signed distance to the near plane `z = -w`. Non-negative means visible.
    #[inline]
    pub fn near_distance(&self) -> f32 {
        self.w + self.xyz[2]
    }

    #[inline]
    pub fn is_in_front(&self) -> bool {
        self.near_distance() >= 0.0
    }

    /// Wire image: 8 words in memory order.
    pub fn to_words(&self) -> [u32; BURST_WORDS] {
        [
            self.flags,
            self.xyz[0].to_bits(),
            self.xyz[1].to_bits(),
            self.xyz[2].to_bits(),
            self.uv[0].to_bits(),
            self.uv[1].to_bits(),
            self.w.to_bits(),
            u32::from_le_bytes(self.bgra),
        ]
    }

    /// Inverse of [`Record::to_words`].
    pub fn from_words(words: &[u32; BURST_WORDS]) -> Self {
        Self {
            flags: words[0],
            xyz: [
                f32::from_bits(words[1]),
                f32::from_bits(words[2]),
                f32::from_bits(words[3]),
            ],
            uv: [f32::from_bits(words[4]), f32::from_bits(words[5])],
            w: f32::from_bits(words[6]),
            bgra: words[7].to_le_bytes(),
        }
    }

    /// Bitwise equality of the wire images. Unlike `==`, NaN payloads in
    /// headers compare equal to themselves.
    pub fn bit_eq(&self, other: &Record) -> bool {
        self.to_words() == other.to_words()
    }
}
