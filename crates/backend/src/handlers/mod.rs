pub mod a001_academic_period;
pub mod a002_club;
pub mod d100_pagela_control;
