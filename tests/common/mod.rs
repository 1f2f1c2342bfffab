//! Builds synthetic SEG-2 files for the integration tests.

pub const LE: u8 = 0x55;
pub const BE: u8 = 0x3A;

pub struct TraceSpec {
    pub code: u8,
    pub sample_count: u32,
    pub header: Vec<(String, String)>,
    pub payload: Vec<u8>,
}

pub struct FileBuilder {
    magic: u8,
    revision: u16,
    header: Vec<Vec<u8>>,
    traces: Vec<TraceSpec>,
}

impl FileBuilder {
    pub fn new(magic: u8) -> Self {
        Self {
            magic,
            revision: 1,
            header: Vec::new(),
            traces: Vec::new(),
        }
    }

    fn big(&self) -> bool {
        self.magic == BE
    }

    fn u16(&self, v: u16) -> [u8; 2] {
        if self.big() { v.to_be_bytes() } else { v.to_le_bytes() }
    }

    fn u32(&self, v: u32) -> [u8; 4] {
        if self.big() { v.to_be_bytes() } else { v.to_le_bytes() }
    }

    pub fn revision(mut self, revision: u16) -> Self {
        self.revision = revision;
        self
    }

    /// Raw chunk text, written with its length prefix.
    pub fn header_chunk(mut self, text: &[u8]) -> Self {
        self.header.push(text.to_vec());
        self
    }

    pub fn header_entry(self, key: &str, value: &str) -> Self {
        self.header_chunk(format!("{key} {value}\0").as_bytes())
    }

    pub fn f32_trace(mut self, header: &[(&str, &str)], samples: &[f32]) -> Self {
        let big = self.big();
        let payload = samples
            .iter()
            .flat_map(|s| if big { s.to_be_bytes() } else { s.to_le_bytes() })
            .collect();
        self.traces.push(TraceSpec {
            code: 4,
            sample_count: samples.len() as u32,
            header: owned(header),
            payload,
        });
        self
    }

    pub fn i32_trace(mut self, header: &[(&str, &str)], samples: &[i32]) -> Self {
        let big = self.big();
        let payload = samples
            .iter()
            .flat_map(|s| if big { s.to_be_bytes() } else { s.to_le_bytes() })
            .collect();
        self.traces.push(TraceSpec {
            code: 2,
            sample_count: samples.len() as u32,
            header: owned(header),
            payload,
        });
        self
    }

    pub fn raw_trace(mut self, spec: TraceSpec) -> Self {
        self.traces.push(spec);
        self
    }

    fn chunk(&self, out: &mut Vec<u8>, text: &[u8]) {
        out.extend_from_slice(&self.u16(text.len() as u16 + 2));
        out.extend_from_slice(text);
    }

    fn trace_bytes(&self, spec: &TraceSpec) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.u16(0x4422));
        out.extend_from_slice(&self.u16(32));
        out.extend_from_slice(&self.u32(spec.payload.len() as u32));
        out.extend_from_slice(&self.u32(spec.sample_count));
        out.push(spec.code);
        out.resize(32, 0);
        for (k, v) in &spec.header {
            self.chunk(&mut out, format!("{k} {v}\0").as_bytes());
        }
        out.extend_from_slice(&self.u16(0));
        out.push(0);
        out.extend_from_slice(&spec.payload);
        out
    }

    pub fn build(&self) -> Vec<u8> {
        let n = self.traces.len() as u16;
        let m = n * 4;

        let mut header = Vec::new();
        for text in &self.header {
            self.chunk(&mut header, text);
        }
        header.extend_from_slice(&self.u16(0));

        let mut out = vec![self.magic, 0];
        out.extend_from_slice(&self.u16(self.revision));
        out.extend_from_slice(&self.u16(m));
        out.extend_from_slice(&self.u16(n));
        out.extend_from_slice(&[1, 0, 0, 1, b'\n', 0]);
        out.resize(32, 0);

        let blocks: Vec<Vec<u8>> = self.traces.iter().map(|t| self.trace_bytes(t)).collect();
        let mut next = (32 + m as usize + header.len()) as u32;
        for block in &blocks {
            out.extend_from_slice(&self.u32(next));
            next += block.len() as u32;
        }
        out.extend(header);
        for block in blocks {
            out.extend(block);
        }
        out
    }
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
