use crate::error::TextColumnsError;
use crate::lines::LinesError;
use crate::table::column::{ColumnDef, ColumnSpec};
use crate::table::table::Table;
use crate::table::value::Value;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use std::ops::Index;
use std::slice::Iter;

/// An ordered collection of text lines forming a conceptual rectangular
/// block.
///
/// Lines may have unequal length; a position beyond a line's end is out of
/// range and is skipped by the whitespace checks. All positions and lengths
/// are measured in characters, so multi-byte text lines up with what a
/// terminal shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineList {
    lines: Vec<String>,
}

impl LineList {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the collection holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line at `index` if it exists.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Returns the lines as a slice.
    pub fn lines(&self) -> &[String] {
        self.lines.as_slice()
    }

    /// Iterates over the lines in order.
    pub fn iter(&self) -> Iter<'_, String> {
        self.lines.iter()
    }

    /// Appends a line.
    pub fn push<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    /// Length of the longest line in characters; None if the collection is
    /// empty or all lines are empty.
    fn max_line_length(&self) -> Option<usize> {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .filter(|length| *length > 0)
    }

    /// Checks if `pos` is a space column: every line long enough to have a
    /// character there has whitespace there. Shorter lines are ignored.
    pub fn is_space_column(&self, pos: usize) -> bool {
        self.lines
            .iter()
            .all(|line| line.chars().nth(pos).map_or(true, char::is_whitespace))
    }

    /// Scans the block for vertical space columns.
    ///
    /// Returns one boolean per position from 0 to the length of the longest
    /// line (exclusive). Fails with [`LinesError::EmptyBlock`] if there is
    /// nothing to scan.
    pub fn identify_all_space_columns(&self) -> Result<Vec<bool>, LinesError> {
        let max_line_length = self.max_line_length().ok_or(LinesError::EmptyBlock)?;
        Ok((0..max_line_length)
            .map(|pos| self.is_space_column(pos))
            .collect())
    }

    /// Infers suitable split positions for converting this block to a table.
    ///
    /// Emits the last position of each maximal run of space columns, i.e.
    /// the position just before the first non-space character that follows
    /// the run. A leading run (indentation) is not a column separator: only
    /// the first run encountered is eligible for that suppression.
    /// `max_split_positions` stops emission once that many positions have
    /// been collected; it must be positive if given.
    pub fn identify_space_column_positions(
        &self,
        max_split_positions: Option<usize>,
    ) -> Result<Vec<usize>, LinesError> {
        let max_line_length = self.max_line_length().ok_or(LinesError::EmptyBlock)?;
        if max_split_positions == Some(0) {
            return Err(LinesError::InvalidSplitLimit);
        }

        let mut positions = Vec::new();
        let mut last_was_space = false;
        let mut allow_appending = !self.is_space_column(0);
        for pos in 0..max_line_length {
            let is_space = self.is_space_column(pos);
            if !is_space && last_was_space {
                if allow_appending {
                    positions.push(pos - 1);
                    if max_split_positions.is_some_and(|limit| positions.len() >= limit) {
                        break;
                    }
                }
                allow_appending = true;
            }
            last_was_space = is_space;
        }
        Ok(positions)
    }

    /// Extracts one column: for every line, the characters in
    /// `[from_pos, to_pos)`, optionally trimmed. Either bound may be open;
    /// at least one must be given. Ranges clamp at the end of short lines.
    pub fn extract_column(
        &self,
        from_pos: Option<usize>,
        to_pos: Option<usize>,
        lstrip: bool,
        rstrip: bool,
    ) -> Result<Vec<String>, LinesError> {
        if from_pos.is_none() && to_pos.is_none() {
            return Err(LinesError::MissingExtractBounds);
        }
        let from = from_pos.unwrap_or(0);

        Ok(self
            .lines
            .iter()
            .map(|line| {
                let mut cell: String = match to_pos {
                    Some(to) => line
                        .chars()
                        .skip(from)
                        .take(to.saturating_sub(from))
                        .collect(),
                    None => line.chars().skip(from).collect(),
                };
                if lstrip {
                    cell = cell.trim_start().to_owned();
                }
                if rstrip {
                    cell = cell.trim_end().to_owned();
                }
                cell
            })
            .collect())
    }

    /// Extracts one column per interval between consecutive split positions,
    /// plus a final column from the last position to end-of-line. A leading
    /// 0 is implied if not already present. Result is column-major: one
    /// inner vector per column, one entry per line.
    pub fn extract_columns(
        &self,
        positions: &[usize],
        lstrip: bool,
        rstrip: bool,
    ) -> Result<Vec<Vec<String>>, LinesError> {
        if positions.is_empty() {
            return Err(LinesError::MissingSplitPositions);
        }
        let mut bounds = Vec::with_capacity(positions.len() + 1);
        if positions[0] != 0 {
            bounds.push(0);
        }
        bounds.extend_from_slice(positions);

        let mut columns = Vec::with_capacity(bounds.len());
        for window in bounds.windows(2) {
            columns.push(self.extract_column(Some(window[0]), Some(window[1]), lstrip, rstrip)?);
        }
        columns.push(self.extract_column(
            Some(bounds[bounds.len() - 1]),
            None,
            lstrip,
            rstrip,
        )?);
        Ok(columns)
    }

    /// Splits the lines at the given positions and builds a string table.
    ///
    /// With `first_line_is_header` the first row is consumed as header
    /// labels; otherwise columns get their zero-based index as name. Every
    /// resulting column definition is parser-less.
    pub fn create_str_table_from_columns(
        &self,
        positions: &[usize],
        lstrip: bool,
        rstrip: bool,
        first_line_is_header: bool,
    ) -> Result<Table<String>, LinesError> {
        let columns = self.extract_columns(positions, lstrip, rstrip)?;
        let column_count = columns.len();
        let row_count = columns[0].len();

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(row_count);
        for row in 0..row_count {
            rows.push(columns.iter().map(|column| column[row].clone()).collect());
        }

        let headers = if first_line_is_header {
            if rows.is_empty() {
                return Err(LinesError::MissingHeaderRow);
            }
            rows.remove(0).into_iter().map(ColumnDef::new).collect()
        } else {
            (0..column_count)
                .map(|index| ColumnDef::new(index.to_string()))
                .collect()
        };
        Ok(Table::new(headers, rows))
    }

    /// Builds a string table and converts it to a typed data table.
    ///
    /// Column identity is resolved from `column_defs` if given (their count
    /// must match the split-derived columns; with `first_line_is_header`
    /// the first data row is discarded unused), else from the first row
    /// when `first_line_is_header`, else the construction fails with
    /// [`LinesError::MissingHeaderSpecification`]. Cells in columns with a
    /// value parser are converted; a parser failure propagates unmodified.
    pub fn create_data_table_from_columns(
        &self,
        positions: &[usize],
        lstrip: bool,
        rstrip: bool,
        first_line_is_header: bool,
        column_defs: Option<Vec<ColumnSpec>>,
    ) -> Result<Table<Value>, TextColumnsError> {
        let mut table = self.create_str_table_from_columns(positions, lstrip, rstrip, false)?;

        let headers: Vec<ColumnDef> = match column_defs {
            Some(specs) => {
                if specs.len() != table.column_count() {
                    return Err(LinesError::ColumnCountMismatch {
                        defined: specs.len(),
                        split: table.column_count(),
                    }
                    .into());
                }
                let defs = specs.into_iter().map(ColumnSpec::into_def).collect();
                if first_line_is_header {
                    if table.is_empty() {
                        return Err(LinesError::MissingHeaderRow.into());
                    }
                    table.remove(0);
                }
                defs
            }
            None if first_line_is_header => {
                if table.is_empty() {
                    return Err(LinesError::MissingHeaderRow.into());
                }
                table.remove(0).into_iter().map(ColumnDef::new).collect()
            }
            None => return Err(LinesError::MissingHeaderSpecification.into()),
        };

        let mut rows = Vec::with_capacity(table.len());
        for row in table {
            let mut cells = Vec::with_capacity(row.len());
            for (cell, header) in row.into_iter().zip(headers.iter()) {
                match &header.value_parser {
                    Some(parser) => cells.push(parser(cell.as_str())?),
                    None => cells.push(Value::Varchar(cell)),
                }
            }
            rows.push(cells);
        }
        Ok(Table::new(headers, rows))
    }

    /// Splits the collection at blank lines into consecutive non-blank
    /// runs. Blank separator lines are omitted and consecutive separators
    /// collapse. With `rstrip`, lines are right-trimmed both for the blank
    /// check and in the returned runs.
    pub fn split_at_empty_lines(&self, rstrip: bool) -> Vec<LineList> {
        let mut runs = Vec::new();
        let mut buffer = LineList::new();

        for line in &self.lines {
            let line = if rstrip { line.trim_end() } else { line.as_str() };
            if !line.is_empty() {
                buffer.push(line);
            } else if !buffer.is_empty() {
                runs.push(std::mem::take(&mut buffer));
            }
        }
        if !buffer.is_empty() {
            runs.push(buffer);
        }
        runs
    }

    /// Removes trailing whitespace from every line, in place.
    pub fn right_trim_all_lines(&mut self) {
        for line in &mut self.lines {
            let trimmed = line.trim_end().len();
            line.truncate(trimmed);
        }
    }

    /// Drops leading lines while they are exactly empty, in place.
    pub fn remove_leading_empty_lines(&mut self) {
        while self.lines.first().is_some_and(|line| line.is_empty()) {
            self.lines.remove(0);
        }
    }

    /// Drops trailing lines while they are exactly empty, in place.
    pub fn remove_trailing_empty_lines(&mut self) {
        while self.lines.last().is_some_and(|line| line.is_empty()) {
            self.lines.pop();
        }
    }

    /// Counts leading whitespace characters per line. A line consisting
    /// entirely of whitespace (or empty) counts its full length.
    pub fn leading_space_counts(&self) -> Vec<usize> {
        self.lines
            .iter()
            .map(|line| {
                line.chars()
                    .take_while(|character| character.is_whitespace())
                    .count()
            })
            .collect()
    }

    /// Strips the whitespace prefix common to all lines, in place. A no-op
    /// if the collection is empty or some line starts with non-whitespace.
    pub fn remove_all_common_leading_spaces(&mut self) {
        let Some(common) = self.leading_space_counts().into_iter().min() else {
            return;
        };
        if common > 0 {
            for line in &mut self.lines {
                *line = line.chars().skip(common).collect();
            }
        }
    }

    /// Line numbers of blank lines. With `strip`, a line is blank if it is
    /// empty after trimming; otherwise only literally empty lines count.
    pub fn line_numbers_of_empty_lines(&self, strip: bool) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| {
                if strip {
                    line.trim().is_empty()
                } else {
                    line.is_empty()
                }
            })
            .map(|(number, _)| number)
            .collect()
    }

    /// Renders a diagnostic view of the collection through `sink`, one
    /// output line at a time, each prefixed with `prefix`.
    ///
    /// With non-empty `split_positions` the block is rendered as
    /// pipe-delimited table rows; otherwise as a JSON listing of the raw
    /// lines. The exact rendering is diagnostic output, not a contract.
    pub fn dump_to<F: FnMut(&str)>(
        &self,
        prefix: &str,
        mut sink: F,
        split_positions: Option<&[usize]>,
    ) -> Result<(), TextColumnsError> {
        match split_positions.filter(|positions| !positions.is_empty()) {
            Some(positions) => {
                let table = self.create_str_table_from_columns(positions, false, false, false)?;
                for row in &table {
                    sink(&format!("{prefix}|{}|", row.join("|")));
                }
            }
            None => {
                let mut buffer = Vec::new();
                let formatter = PrettyFormatter::with_indent(b"\t");
                let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
                self.serialize(&mut serializer)?;
                let rendered = String::from_utf8(buffer).expect("UTF-8 JSON");
                for line in rendered.split('\n') {
                    sink(&format!("{prefix}{line}"));
                }
            }
        }
        Ok(())
    }

    /// [`dump_to`](Self::dump_to) with standard output as the sink.
    pub fn dump(
        &self,
        prefix: &str,
        split_positions: Option<&[usize]>,
    ) -> Result<(), TextColumnsError> {
        self.dump_to(prefix, |line| println!("{line}"), split_positions)
    }
}

impl From<&str> for LineList {
    /// Splits raw multi-line text on `\n`. Exactly one trailing newline is
    /// absorbed, so text ending with a terminal newline does not produce a
    /// trailing blank line; interior blank lines remain.
    fn from(text: &str) -> Self {
        let text = text.strip_suffix('\n').unwrap_or(text);
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }
}

impl From<String> for LineList {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<Vec<String>> for LineList {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl From<Vec<&str>> for LineList {
    fn from(lines: Vec<&str>) -> Self {
        Self {
            lines: lines.into_iter().map(str::to_owned).collect(),
        }
    }
}

impl FromIterator<String> for LineList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for LineList {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

impl IntoIterator for LineList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a LineList {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
