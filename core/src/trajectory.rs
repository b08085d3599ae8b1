use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use itertools::izip;
use na::Vector3;

const HEADER: [&str; 4] = ["t", "x", "y", "z"];

#[derive(Debug)]
pub enum SaveLoadError {
    CantOpen(std::io::Error),
    CantCreate(std::io::Error),
    CantWrite(csv::Error),
    CantRead(csv::Error),
    BadHeader,
    BadRecord(usize),
}

impl fmt::Display for SaveLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CantOpen(e) => write!(f, "can't open trajectory file: {}", e),
            Self::CantCreate(e) => write!(f, "can't create trajectory file: {}", e),
            Self::CantWrite(e) => write!(f, "can't write trajectory file: {}", e),
            Self::CantRead(e) => write!(f, "can't read trajectory file: {}", e),
            Self::BadHeader => write!(f, "trajectory file must start with a t,x,y,z header"),
            Self::BadRecord(row) => write!(f, "trajectory file has a malformed record at row {}", row),
        }
    }
}

/// Row-by-row trajectory writer over any `Write` sink.
///
/// The header goes out on construction; call [TrajectoryWriter::finish]
/// when all rows are written so buffered data reaches the file before
/// success is reported. Values are written with the shortest
/// representation that parses back to the identical float.
pub struct TrajectoryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl TrajectoryWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self, SaveLoadError> {
        let file = if !path.exists() {
            File::create(path)
        } else {
            OpenOptions::new().truncate(true).write(true).open(path)
        };
        let file = file.map_err(SaveLoadError::CantCreate)?;
        TrajectoryWriter::new(BufWriter::new(file))
    }
}

impl<W: Write> TrajectoryWriter<W> {
    pub fn new(sink: W) -> Result<Self, SaveLoadError> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record(HEADER).map_err(SaveLoadError::CantWrite)?;
        Ok(TrajectoryWriter { writer })
    }

    pub fn write_row(&mut self, t: f64, state: &Vector3<f64>) -> Result<(), SaveLoadError> {
        self.writer
            .write_record(&[
                t.to_string(),
                state.x.to_string(),
                state.y.to_string(),
                state.z.to_string(),
            ])
            .map_err(SaveLoadError::CantWrite)
    }

    pub fn finish(mut self) -> Result<(), SaveLoadError> {
        self.writer
            .flush()
            .map_err(|e| SaveLoadError::CantWrite(csv::Error::from(e)))
    }
}

/// Write a full trajectory as one tabular file with a t,x,y,z header.
pub fn save_trajectory_to_file(
    times: &[f64],
    states: &[Vector3<f64>],
    path: &Path,
) -> Result<(), SaveLoadError> {
    let mut writer = TrajectoryWriter::create(path)?;
    for (t, state) in izip!(times, states) {
        writer.write_row(*t, state)?;
    }
    writer.finish()?;
    log::debug!("trajectory of {} rows saved to {:?}", times.len(), path);
    Ok(())
}

/// Read a trajectory back as (times, states) in file order.
pub fn load_trajectory_from_file(
    path: &Path,
) -> Result<(Vec<f64>, Vec<Vector3<f64>>), SaveLoadError> {
    let file = File::open(path).map_err(SaveLoadError::CantOpen)?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    {
        let headers = reader.headers().map_err(SaveLoadError::CantRead)?;
        if !headers.iter().eq(HEADER) {
            return Err(SaveLoadError::BadHeader);
        }
    }
    let mut times = vec![];
    let mut states = vec![];
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(SaveLoadError::CantRead)?;
        if record.len() != HEADER.len() {
            return Err(SaveLoadError::BadRecord(row));
        }
        let mut values = [0.0f64; 4];
        for (value, field) in izip!(&mut values, record.iter()) {
            *value = field.parse().map_err(|_| SaveLoadError::BadRecord(row))?;
        }
        times.push(values[0]);
        states.push(Vector3::new(values[1], values[2], values[3]));
    }
    Ok((times, states))
}
