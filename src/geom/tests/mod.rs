mod test_bbox_basic;
