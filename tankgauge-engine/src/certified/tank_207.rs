//! Tank 207 calibration certificate data, reference 20257001051EN-207.

/// Height (mm) to volume (L) points from the calibration certificate.
pub(super) const CAPACITY_POINTS: [(f64, f64); 138] = [
    (0.0, 66.0), (1.0, 74.0), (2.0, 81.0), (3.0, 89.0), (4.0, 96.0), (5.0, 104.0),
    (6.0, 111.0), (7.0, 118.0), (8.0, 126.0), (9.0, 133.0), (10.0, 140.0), (11.0, 148.0),
    (12.0, 156.0), (13.0, 164.0), (14.0, 172.0), (15.0, 180.0), (16.0, 188.0), (17.0, 197.0),
    (18.0, 205.0), (19.0, 214.0), (20.0, 223.0), (21.0, 232.0), (22.0, 241.0), (23.0, 250.0),
    (24.0, 259.0), (25.0, 269.0), (26.0, 278.0), (27.0, 288.0), (28.0, 298.0), (29.0, 307.0),
    (30.0, 317.0), (31.0, 327.0), (32.0, 337.0), (33.0, 347.0), (34.0, 357.0), (35.0, 367.0),
    (36.0, 377.0), (37.0, 388.0), (38.0, 398.0), (39.0, 408.0), (40.0, 419.0), (41.0, 430.0),
    (42.0, 440.0), (43.0, 451.0), (44.0, 462.0), (45.0, 473.0), (46.0, 484.0), (47.0, 495.0),
    (48.0, 506.0), (49.0, 518.0), (50.0, 529.0), (51.0, 540.0), (52.0, 552.0), (53.0, 564.0),
    (54.0, 575.0), (55.0, 587.0), (56.0, 599.0), (57.0, 610.0), (58.0, 622.0), (59.0, 634.0),
    (60.0, 646.0), (61.0, 658.0), (62.0, 671.0), (63.0, 683.0), (64.0, 695.0), (65.0, 707.0),
    (66.0, 720.0), (67.0, 733.0), (68.0, 745.0), (69.0, 758.0), (70.0, 771.0), (71.0, 784.0),
    (72.0, 797.0), (73.0, 810.0), (74.0, 823.0), (75.0, 836.0), (76.0, 850.0), (77.0, 863.0),
    (78.0, 877.0), (79.0, 890.0), (80.0, 904.0), (81.0, 917.0), (82.0, 931.0), (83.0, 945.0),
    (84.0, 959.0), (85.0, 973.0), (86.0, 987.0), (87.0, 1001.0), (88.0, 1015.0), (89.0, 1030.0),
    (90.0, 1044.0), (91.0, 1058.0), (92.0, 1073.0), (93.0, 1087.0), (94.0, 1102.0), (95.0, 1117.0),
    (96.0, 1131.0), (97.0, 1146.0), (98.0, 1161.0), (99.0, 1176.0), (100.0, 1191.0), (101.0, 1206.0),
    (102.0, 1221.0), (103.0, 1237.0), (104.0, 1252.0), (105.0, 1267.0), (106.0, 1283.0), (107.0, 1298.0),
    (108.0, 1314.0), (109.0, 1329.0), (110.0, 1345.0), (111.0, 1361.0), (112.0, 1376.0), (113.0, 1392.0),
    (114.0, 1408.0), (115.0, 1424.0), (116.0, 1440.0), (117.0, 1456.0), (118.0, 1473.0), (119.0, 1489.0),
    (120.0, 1505.0), (121.0, 1521.0), (122.0, 1538.0), (123.0, 1554.0), (124.0, 1571.0), (125.0, 1587.0),
    (126.0, 1604.0), (127.0, 1621.0), (128.0, 1638.0), (129.0, 1654.0), (130.0, 1671.0), (131.0, 1688.0),
    (132.0, 1705.0), (133.0, 1722.0), (134.0, 1739.0), (135.0, 1756.0), (136.0, 1774.0), (137.0, 1791.0),
];
