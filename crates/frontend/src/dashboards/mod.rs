pub mod d100_pagela_control;
