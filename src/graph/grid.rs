use crate::graph::directed::DirectedGraph;
use crate::graph::traits::MutableGraph;
use crate::graph::weight::Weight;
use crate::{Error, Result};

/// A rectangular maze of open cells and walls
///
/// Cell `(row, col)` maps to vertex `row * cols + col`. Walls are kept as
/// vertices without edges so vertex ids stay stable while the maze is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMaze {
    rows: usize,
    cols: usize,
    walls: Vec<bool>,
    start: Option<(usize, usize)>,
    end: Option<(usize, usize)>,
}

impl GridMaze {
    /// Creates a maze with every cell open
    pub fn new(rows: usize, cols: usize) -> Self {
        GridMaze {
            rows,
            cols,
            walls: vec![false; rows * cols],
            start: None,
            end: None,
        }
    }

    /// Parses a maze drawn as text, one line per row.
    ///
    /// `#` is a wall, `.` an open cell, `S` and `E` open cells marking the
    /// start and end. Blank lines are ignored; all rows must share a width.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        if rows == 0 || cols == 0 {
            return Err(Error::Parse("maze is empty".to_string()));
        }

        let mut maze = GridMaze::new(rows, cols);
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(Error::Parse(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    cols
                )));
            }
            for (col, cell) in line.chars().enumerate() {
                match cell {
                    '#' => maze.walls[row * cols + col] = true,
                    '.' => {}
                    'S' => maze.start = Some((row, col)),
                    'E' => maze.end = Some((row, col)),
                    other => {
                        return Err(Error::Parse(format!(
                            "unexpected cell {:?} at row {}, column {}",
                            other, row, col
                        )))
                    }
                }
            }
        }

        Ok(maze)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Option<(usize, usize)> {
        self.start
    }

    pub fn end(&self) -> Option<(usize, usize)> {
        self.end
    }

    /// Vertex id of a cell
    pub fn id_from_coord(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell of a vertex id
    pub fn coord_from_id(&self, id: usize) -> (usize, usize) {
        (id / self.cols, id % self.cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.walls[self.id_from_coord(row, col)]
    }

    /// Flips a cell between wall and open. Start and end cells cannot
    /// become walls; returns whether the cell changed.
    pub fn toggle_wall(&mut self, row: usize, col: usize) -> bool {
        if !self.contains(row, col) || self.start == Some((row, col)) || self.end == Some((row, col)) {
            return false;
        }
        let id = self.id_from_coord(row, col);
        self.walls[id] = !self.walls[id];
        true
    }

    /// Moves the start marker, opening the cell if it was a wall. Returns
    /// false for cells outside the grid.
    pub fn set_start(&mut self, row: usize, col: usize) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let id = self.id_from_coord(row, col);
        self.walls[id] = false;
        self.start = Some((row, col));
        true
    }

    pub fn set_end(&mut self, row: usize, col: usize) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let id = self.id_from_coord(row, col);
        self.walls[id] = false;
        self.end = Some((row, col));
        true
    }

    /// Removes all walls and the start/end markers
    pub fn clear(&mut self) {
        self.walls.iter_mut().for_each(|wall| *wall = false);
        self.start = None;
        self.end = None;
    }

    /// Converts the maze into a graph where open cells are connected
    /// orthogonally with edges of weight `step`
    pub fn to_graph<W: Weight>(&self, step: W) -> DirectedGraph<W> {
        let mut graph = DirectedGraph::with_capacity(self.rows * self.cols);

        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.is_wall(row, col) {
                    continue;
                }
                let current = self.id_from_coord(row, col);

                // Up, down, left, right
                let neighbours = [
                    row.checked_sub(1).map(|r| (r, col)),
                    Some((row + 1, col)),
                    col.checked_sub(1).map(|c| (row, c)),
                    Some((row, col + 1)),
                ];
                for (nr, nc) in neighbours.into_iter().flatten() {
                    if self.contains(nr, nc) && !self.is_wall(nr, nc) {
                        graph.add_edge(current, self.id_from_coord(nr, nc), step);
                    }
                }
            }
        }

        graph
    }

    /// Manhattan-distance heuristic towards `target`, scaled to unit steps.
    /// Admissible for graphs built with `to_graph(1)`.
    pub fn manhattan(&self, target: (usize, usize)) -> impl Fn(usize) -> u64 + '_ {
        move |id| {
            let (row, col) = self.coord_from_id(id);
            (row.abs_diff(target.0) + col.abs_diff(target.1)) as u64
        }
    }
}
